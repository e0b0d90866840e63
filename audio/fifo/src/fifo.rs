/*!
    Ring-buffer backed sample FIFO.
*/

use tracing::trace;

use audio_types::{AudioBuffer, AudioParams, ChannelLayout, Error, Result, SampleFormat};

/**
    A first-in-first-out queue of audio samples.

    Samples are stored in one ring per plane: a single ring for
    interleaved formats, one ring per channel for planar formats.
    `size() + space() == capacity()` holds after every operation.
*/
pub struct SampleFifo {
    format: SampleFormat,
    layout: ChannelLayout,
    stride: usize,
    planes: Vec<Vec<u8>>,
    capacity: usize,
    head: usize,
    size: usize,
}

impl SampleFifo {
    /**
        Create a FIFO for the given format and layout with room for
        `capacity` samples per channel.
    */
    pub fn new(format: SampleFormat, layout: ChannelLayout, capacity: usize) -> Result<Self> {
        let stride = format.plane_stride(layout.channels());
        let planes = (0..format.plane_count(layout.channels()))
            .map(|_| alloc_plane(capacity, stride))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            format,
            layout,
            stride,
            planes,
            capacity,
            head: 0,
            size: 0,
        })
    }

    /**
        Number of samples currently buffered.
    */
    pub fn size(&self) -> usize {
        self.size
    }

    /**
        Number of samples that can be written without growing.
    */
    pub fn space(&self) -> usize {
        self.capacity - self.size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn format(&self) -> SampleFormat {
        self.format
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn channels(&self) -> u16 {
        self.layout.channels()
    }

    /**
        Number of planes every read and write must supply.
    */
    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /**
        Grow the storage so that at least `additional` samples fit
        without another reallocation.
    */
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        if self.space() >= additional {
            return Ok(());
        }
        let target = self
            .size
            .checked_add(additional)
            .ok_or(Error::Alloc { samples: usize::MAX })?;
        self.grow(target)
    }

    /**
        Append `samples` samples from `planes` to the tail.

        Each plane must hold at least `samples` samples. Grows the storage
        to exactly `size() + samples` when the free space is too small.
        Returns the number of samples written.
    */
    pub fn write<P: AsRef<[u8]>>(&mut self, planes: &[P], samples: usize) -> Result<usize> {
        self.check_planes(planes.iter().map(|p| p.as_ref().len()), planes.len(), samples)?;
        if samples == 0 {
            return Ok(0);
        }

        self.reserve(samples)?;

        let tail = (self.head + self.size) % self.capacity;
        let len = samples * self.stride;
        for (ring, src) in self.planes.iter_mut().zip(planes) {
            ring_write(ring, self.stride, tail, &src.as_ref()[..len]);
        }
        self.size += samples;

        trace!(samples, size = self.size, "fifo write");
        Ok(samples)
    }

    /**
        Append the whole contents of `buffer`.

        The buffer must match the format and layout of this FIFO.
    */
    pub fn write_buffer(&mut self, buffer: &AudioBuffer) -> Result<usize> {
        if buffer.format() != self.format || buffer.layout() != self.layout {
            return Err(Error::config(format!(
                "fifo holds {} {}, got {} {}",
                self.format,
                self.layout,
                buffer.format(),
                buffer.layout()
            )));
        }
        self.write(buffer.planes(), buffer.samples())
    }

    /**
        Copy `samples` samples from the head into `planes` and remove them.
    */
    pub fn read<P: AsMut<[u8]>>(&mut self, planes: &mut [P], samples: usize) -> Result<usize> {
        self.peek_at(planes, samples, 0)?;
        self.consume(samples);
        Ok(samples)
    }

    /**
        Remove `samples` samples from the head into a new buffer.
    */
    pub fn read_buffer(&mut self, samples: usize, sample_rate: u32) -> Result<AudioBuffer> {
        self.check_available(samples, 0)?;

        let mut planes = vec![vec![0u8; samples * self.stride]; self.plane_count()];
        self.read(&mut planes, samples)?;

        let params = AudioParams::new(self.format, self.layout, sample_rate);
        AudioBuffer::new(params, samples, planes)
    }

    /**
        Copy `samples` samples from the head into `planes` without removing them.
    */
    pub fn peek<P: AsMut<[u8]>>(&self, planes: &mut [P], samples: usize) -> Result<usize> {
        self.peek_at(planes, samples, 0)
    }

    /**
        Copy `samples` samples starting `offset` samples after the head
        into `planes` without removing anything.
    */
    pub fn peek_at<P: AsMut<[u8]>>(
        &self,
        planes: &mut [P],
        samples: usize,
        offset: usize,
    ) -> Result<usize> {
        self.check_available(samples, offset)?;
        let count = planes.len();
        self.check_planes(planes.iter_mut().map(|p| p.as_mut().len()), count, samples)?;
        if samples == 0 {
            return Ok(0);
        }

        let start = (self.head + offset) % self.capacity;
        let len = samples * self.stride;
        for (ring, dst) in self.planes.iter().zip(planes.iter_mut()) {
            ring_read(ring, self.stride, start, &mut dst.as_mut()[..len]);
        }
        Ok(samples)
    }

    /**
        Remove `samples` samples from the head without copying them.
    */
    pub fn drain(&mut self, samples: usize) -> Result<()> {
        self.check_available(samples, 0)?;
        self.consume(samples);
        Ok(())
    }

    /**
        Discard everything buffered, keeping the allocation.
    */
    pub fn clear(&mut self) {
        self.head = 0;
        self.size = 0;
    }

    /**
        Discard everything buffered and free the storage.

        The FIFO stays usable and grows again on the next write.
    */
    pub fn release(&mut self) {
        for plane in &mut self.planes {
            *plane = Vec::new();
        }
        self.capacity = 0;
        self.clear();
    }

    fn consume(&mut self, samples: usize) {
        if samples == 0 {
            return;
        }
        self.size -= samples;
        self.head = if self.size == 0 {
            0
        } else {
            (self.head + samples) % self.capacity
        };
    }

    fn check_available(&self, samples: usize, offset: usize) -> Result<()> {
        let requested = samples.saturating_add(offset);
        if requested > self.size {
            return Err(Error::Underflow {
                requested,
                available: self.size,
            });
        }
        Ok(())
    }

    fn check_planes(
        &self,
        lens: impl Iterator<Item = usize>,
        count: usize,
        samples: usize,
    ) -> Result<()> {
        if count != self.plane_count() {
            return Err(Error::invalid_layout(format!(
                "{} {} expects {} planes, got {count}",
                self.format,
                self.layout,
                self.plane_count()
            )));
        }

        let needed = samples
            .checked_mul(self.stride)
            .ok_or_else(|| Error::invalid_layout(format!("{samples} samples overflow a plane")))?;
        for (index, len) in lens.enumerate() {
            if len < needed {
                return Err(Error::invalid_layout(format!(
                    "plane {index} is {len} bytes, need {needed} for {samples} samples"
                )));
            }
        }
        Ok(())
    }

    /**
        Reallocate to `capacity` samples, moving buffered data to the start
        of the new rings. Leaves the FIFO untouched on failure.
    */
    fn grow(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity {
            return Ok(());
        }

        let len = self.size * self.stride;
        let mut planes = Vec::with_capacity(self.planes.len());
        for ring in &self.planes {
            let mut plane = alloc_plane(capacity, self.stride)?;
            if self.size > 0 {
                ring_read(ring, self.stride, self.head, &mut plane[..len]);
            }
            planes.push(plane);
        }

        trace!(from = self.capacity, to = capacity, size = self.size, "fifo grow");

        self.planes = planes;
        self.capacity = capacity;
        self.head = 0;
        Ok(())
    }
}

impl std::fmt::Debug for SampleFifo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleFifo")
            .field("format", &self.format)
            .field("layout", &self.layout)
            .field("size", &self.size)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

fn alloc_plane(capacity: usize, stride: usize) -> Result<Vec<u8>> {
    let bytes = capacity
        .checked_mul(stride)
        .ok_or(Error::Alloc { samples: capacity })?;
    let mut plane = Vec::new();
    plane
        .try_reserve_exact(bytes)
        .map_err(|_| Error::Alloc { samples: capacity })?;
    plane.resize(bytes, 0);
    Ok(plane)
}

/**
    Copy `src` into the ring starting at sample index `start`, wrapping
    around the end.
*/
fn ring_write(ring: &mut [u8], stride: usize, start: usize, src: &[u8]) {
    let offset = start * stride;
    let first = src.len().min(ring.len() - offset);
    ring[offset..offset + first].copy_from_slice(&src[..first]);
    ring[..src.len() - first].copy_from_slice(&src[first..]);
}

/**
    Fill `dst` from the ring starting at sample index `start`, wrapping
    around the end.
*/
fn ring_read(ring: &[u8], stride: usize, start: usize, dst: &mut [u8]) {
    let offset = start * stride;
    let first = dst.len().min(ring.len() - offset);
    let (head, tail) = dst.split_at_mut(first);
    head.copy_from_slice(&ring[offset..offset + first]);
    tail.copy_from_slice(&ring[..tail.len()]);
}

static_assertions::assert_impl_all!(SampleFifo: Send, Sync);
