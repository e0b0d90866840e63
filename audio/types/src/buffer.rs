/*!
    Audio sample buffers.
*/

use std::time::Duration;

use bytemuck::Pod;

use crate::{AudioParams, ChannelLayout, Error, Pts, Rational, Result, SampleFormat};

/**
    One block of audio samples.

    Planar formats hold one plane per channel, interleaved formats hold a
    single plane with all channels. Every plane is exactly
    `samples * format.plane_stride(channels)` bytes long, which is checked
    whenever a buffer is constructed from caller data.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioBuffer {
    planes: Vec<Vec<u8>>,
    samples: usize,
    params: AudioParams,
    pts: Option<Pts>,
}

impl AudioBuffer {
    /**
        Create a buffer from raw planes.

        Fails with [`Error::InvalidLayout`] if the number of planes or the
        length of any plane does not match `params` and `samples`.
    */
    pub fn new(params: AudioParams, samples: usize, planes: Vec<Vec<u8>>) -> Result<Self> {
        let expected_planes = params.format.plane_count(params.channels());
        if planes.len() != expected_planes {
            return Err(Error::invalid_layout(format!(
                "{} expects {expected_planes} planes, got {}",
                params.format,
                planes.len()
            )));
        }

        let expected_len = samples
            .checked_mul(params.format.plane_stride(params.channels()))
            .ok_or_else(|| Error::invalid_layout(format!("{samples} samples overflow a plane")))?;
        if let Some((index, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, plane)| plane.len() != expected_len)
        {
            return Err(Error::invalid_layout(format!(
                "plane {index} is {} bytes, expected {expected_len}",
                plane.len()
            )));
        }

        Ok(Self {
            planes,
            samples,
            params,
            pts: None,
        })
    }

    /**
        Create a buffer of `samples` samples of silence.

        # Panics

        Panics if the plane size in bytes overflows `usize`.
    */
    pub fn silence(params: AudioParams, samples: usize) -> Self {
        // Unsigned 8-bit audio is centered on 0x80
        let fill = match params.format {
            SampleFormat::U8 | SampleFormat::U8P => 0x80,
            _ => 0,
        };
        let len = samples * params.format.plane_stride(params.channels());
        let planes = (0..params.format.plane_count(params.channels()))
            .map(|_| vec![fill; len])
            .collect();
        Self {
            planes,
            samples,
            params,
            pts: None,
        }
    }

    /**
        Create an interleaved buffer from typed samples, e.g. `&[i16]` for
        [`SampleFormat::S16`]: `[L0, R0, L1, R1, ...]`.
    */
    pub fn from_interleaved<T: Pod>(params: AudioParams, data: &[T]) -> Result<Self> {
        if params.format.is_planar() {
            return Err(Error::invalid_layout(format!(
                "{} is planar, use from_planes",
                params.format
            )));
        }
        check_sample_type::<T>(params.format)?;

        let channels = params.channels() as usize;
        if data.len() % channels != 0 {
            return Err(Error::invalid_layout(format!(
                "{} values do not divide into {channels} channels",
                data.len()
            )));
        }

        let samples = data.len() / channels;
        let bytes = bytemuck::cast_slice::<T, u8>(data).to_vec();
        Self::new(params, samples, vec![bytes])
    }

    /**
        Create a planar buffer from one slice of typed samples per channel.
    */
    pub fn from_planes<T: Pod>(params: AudioParams, data: &[&[T]]) -> Result<Self> {
        if !params.format.is_planar() {
            return Err(Error::invalid_layout(format!(
                "{} is interleaved, use from_interleaved",
                params.format
            )));
        }
        check_sample_type::<T>(params.format)?;

        let samples = data.first().map_or(0, |plane| plane.len());
        let planes = data
            .iter()
            .map(|plane| bytemuck::cast_slice::<T, u8>(plane).to_vec())
            .collect();
        Self::new(params, samples, planes)
    }

    /**
        Returns this buffer with the given presentation timestamp.
    */
    pub fn with_pts(mut self, pts: Option<Pts>) -> Self {
        self.pts = pts;
        self
    }

    /**
        Set the presentation timestamp, in `1/sample_rate` units.
    */
    pub fn set_pts(&mut self, pts: Option<Pts>) {
        self.pts = pts;
    }

    /**
        Presentation timestamp, in `1/sample_rate` units.
    */
    pub fn pts(&self) -> Option<Pts> {
        self.pts
    }

    /**
        Number of samples per channel.
    */
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn params(&self) -> AudioParams {
        self.params
    }

    pub fn format(&self) -> SampleFormat {
        self.params.format
    }

    pub fn layout(&self) -> ChannelLayout {
        self.params.layout
    }

    pub fn channels(&self) -> u16 {
        self.params.channels()
    }

    pub fn sample_rate(&self) -> u32 {
        self.params.sample_rate
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /**
        Length in bytes of every plane.
    */
    pub fn plane_len(&self) -> usize {
        self.samples * self.params.format.plane_stride(self.channels())
    }

    pub fn plane(&self, index: usize) -> Option<&[u8]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    pub fn plane_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        self.planes.get_mut(index).map(Vec::as_mut_slice)
    }

    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /**
        Mutable access to the planes.

        Plane lengths cannot change through this view, so the layout
        invariant is preserved.
    */
    pub fn planes_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.planes.iter_mut().map(Vec::as_mut_slice)
    }

    /**
        Copy a plane out as typed samples.

        Returns `None` if the plane does not exist.
    */
    pub fn plane_to_vec<T: Pod>(&self, index: usize) -> Option<Vec<T>> {
        self.plane(index).map(bytemuck::pod_collect_to_vec::<u8, T>)
    }

    pub fn into_planes(self) -> Vec<Vec<u8>> {
        self.planes
    }

    /**
        Returns the total number of samples (samples per channel * channels).
    */
    pub fn total_samples(&self) -> usize {
        self.samples * self.channels() as usize
    }

    /**
        Returns the duration of this buffer based on sample count and rate.
    */
    pub fn duration(&self) -> Duration {
        if self.params.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples as f64 / self.params.sample_rate as f64)
    }

    /**
        Returns the presentation time as a Duration, if PTS is set.
    */
    pub fn presentation_time(&self) -> Option<Duration> {
        if self.params.sample_rate == 0 {
            return None;
        }
        let time_base = Rational::per_sample(self.params.sample_rate);
        self.pts.map(|pts| pts.to_duration(time_base))
    }
}

fn check_sample_type<T>(format: SampleFormat) -> Result<()> {
    let size = std::mem::size_of::<T>();
    if size != format.bytes_per_sample() {
        return Err(Error::invalid_layout(format!(
            "{format} has {}-byte samples, got {size}-byte values",
            format.bytes_per_sample()
        )));
    }
    Ok(())
}

static_assertions::assert_impl_all!(AudioBuffer: Send, Sync);
