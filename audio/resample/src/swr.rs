/*!
    Converter backed by libswresample.
*/

use std::os::raw::c_int;
use std::ptr;

use ffmpeg_next::ffi;

use audio_types::{AudioBuffer, AudioParams, ChannelLayout, Error, Result, SampleFormat};

use crate::Converter;

/**
    A libswresample conversion context.

    Owns the underlying `SwrContext` and frees it on drop. The raw handle
    is only reachable through [`SwrConverter::as_ptr`] and
    [`SwrConverter::as_mut_ptr`].
*/
pub struct SwrConverter {
    context: *mut ffi::SwrContext,
    source: AudioParams,
    target: AudioParams,
}

// SAFETY: the context is exclusively owned and only touched through &mut self
unsafe impl Send for SwrConverter {}

impl SwrConverter {
    /**
        Raw handle to the underlying context.
    */
    pub fn as_ptr(&self) -> *const ffi::SwrContext {
        self.context
    }

    /**
        Mutable raw handle to the underlying context.
    */
    pub fn as_mut_ptr(&mut self) -> *mut ffi::SwrContext {
        self.context
    }

    pub fn source(&self) -> AudioParams {
        self.source
    }

    pub fn target(&self) -> AudioParams {
        self.target
    }

    /**
        Run one `swr_convert` call. `input` of `None` flushes the context.
    */
    fn run(
        &mut self,
        output: &mut AudioBuffer,
        input: Option<Vec<*const u8>>,
        input_samples: usize,
    ) -> Result<usize> {
        if output.params() != self.target {
            return Err(Error::invalid_layout(format!(
                "output buffer is {}, context produces {}",
                output.params(),
                self.target
            )));
        }

        let out_count = to_c_int(output.samples())?;
        let in_count = to_c_int(input_samples)?;

        let mut out_planes: Vec<*mut u8> = output.planes_mut().map(|p| p.as_mut_ptr()).collect();
        let mut in_planes = input;
        let in_ptr = match in_planes.as_mut() {
            Some(planes) => planes.as_mut_ptr(),
            None => ptr::null_mut(),
        };

        // SAFETY: out_planes point into planes of at least out_count samples,
        // in_planes into planes of at least in_count samples (or are unused
        // when in_count is zero), both matching the formats the context was
        // opened with.
        let ret = unsafe {
            ffi::swr_convert(
                self.context,
                out_planes.as_mut_ptr(),
                out_count,
                in_ptr,
                in_count,
            )
        };

        if ret < 0 {
            return Err(Error::conversion(ret, av_error(ret)));
        }
        Ok(ret as usize)
    }
}

impl Converter for SwrConverter {
    fn open(source: AudioParams, target: AudioParams) -> Result<Self> {
        if source.sample_rate == 0 || target.sample_rate == 0 {
            return Err(Error::config(format!(
                "cannot convert {source} to {target}: zero sample rate"
            )));
        }

        let mut in_layout = channel_layout(source.layout)?;
        let mut out_layout = match channel_layout(target.layout) {
            Ok(layout) => layout,
            Err(e) => {
                // SAFETY: in_layout was initialized by channel_layout
                unsafe { ffi::av_channel_layout_uninit(&mut in_layout) };
                return Err(e);
            }
        };

        let mut context: *mut ffi::SwrContext = ptr::null_mut();

        // SAFETY: both layouts are initialized; swr_alloc_set_opts2 copies them
        let ret = unsafe {
            ffi::swr_alloc_set_opts2(
                &mut context,
                &out_layout,
                sample_format(target.format),
                target.sample_rate as c_int,
                &in_layout,
                sample_format(source.format),
                source.sample_rate as c_int,
                0,
                ptr::null_mut(),
            )
        };

        // SAFETY: the context holds its own copies from here on
        unsafe {
            ffi::av_channel_layout_uninit(&mut in_layout);
            ffi::av_channel_layout_uninit(&mut out_layout);
        }

        if ret < 0 || context.is_null() {
            // SAFETY: swr_free accepts a null context
            unsafe { ffi::swr_free(&mut context) };
            return Err(Error::config(format!(
                "could not allocate context for {source} -> {target}: {}",
                av_error(ret)
            )));
        }

        // SAFETY: context was allocated above
        let ret = unsafe { ffi::swr_init(context) };
        if ret < 0 {
            // SAFETY: context was allocated above and is not used again
            unsafe { ffi::swr_free(&mut context) };
            return Err(Error::config(format!(
                "could not initialize context for {source} -> {target}: {}",
                av_error(ret)
            )));
        }

        Ok(Self {
            context,
            source,
            target,
        })
    }

    fn convert(&mut self, output: &mut AudioBuffer, input: Option<&AudioBuffer>) -> Result<usize> {
        match input {
            Some(buffer) => {
                if buffer.params() != self.source {
                    return Err(Error::FormatChanged {
                        expected: self.source,
                        got: buffer.params(),
                    });
                }
                let planes = buffer.planes().iter().map(|p| p.as_ptr()).collect();
                self.run(output, Some(planes), buffer.samples())
            }
            None => {
                // A non-null input with zero samples drains buffered output
                // without flushing the resampler's filter history
                let count = self.source.format.plane_count(self.source.channels());
                self.run(output, Some(vec![ptr::null(); count]), 0)
            }
        }
    }

    fn flush(&mut self, output: &mut AudioBuffer) -> Result<usize> {
        self.run(output, None, 0)
    }

    fn delay(&self) -> usize {
        // SAFETY: the context is valid for the lifetime of self
        let delay = unsafe { ffi::swr_get_delay(self.context, self.target.sample_rate as i64) };
        delay.max(0) as usize
    }
}

impl Drop for SwrConverter {
    fn drop(&mut self) {
        // SAFETY: swr_free nulls the pointer, so a second call is a no-op
        unsafe { ffi::swr_free(&mut self.context) };
    }
}

impl std::fmt::Debug for SwrConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwrConverter")
            .field("source", &self.source)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/**
    Build an FFmpeg channel layout for one of our layouts.

    The returned layout must be released with `av_channel_layout_uninit`.
*/
fn channel_layout(layout: ChannelLayout) -> Result<ffi::AVChannelLayout> {
    let mask = match layout {
        ChannelLayout::Mono => ffi::AV_CH_LAYOUT_MONO,
        ChannelLayout::Stereo => ffi::AV_CH_LAYOUT_STEREO,
        ChannelLayout::Surround21 => ffi::AV_CH_LAYOUT_2POINT1,
        ChannelLayout::Quad => ffi::AV_CH_LAYOUT_QUAD,
        ChannelLayout::Surround51 => ffi::AV_CH_LAYOUT_5POINT1,
        ChannelLayout::Surround71 => ffi::AV_CH_LAYOUT_7POINT1,
    };

    // SAFETY: all-zero is the unset layout, which from_mask overwrites
    let mut av_layout: ffi::AVChannelLayout = unsafe { std::mem::zeroed() };
    let ret = unsafe { ffi::av_channel_layout_from_mask(&mut av_layout, mask) };
    if ret < 0 {
        return Err(Error::config(format!(
            "unsupported channel layout {layout}: {}",
            av_error(ret)
        )));
    }
    Ok(av_layout)
}

fn sample_format(format: SampleFormat) -> ffi::AVSampleFormat {
    use ffi::AVSampleFormat as Av;

    match format {
        SampleFormat::U8 => Av::AV_SAMPLE_FMT_U8,
        SampleFormat::S16 => Av::AV_SAMPLE_FMT_S16,
        SampleFormat::S32 => Av::AV_SAMPLE_FMT_S32,
        SampleFormat::S64 => Av::AV_SAMPLE_FMT_S64,
        SampleFormat::F32 => Av::AV_SAMPLE_FMT_FLT,
        SampleFormat::F64 => Av::AV_SAMPLE_FMT_DBL,
        SampleFormat::U8P => Av::AV_SAMPLE_FMT_U8P,
        SampleFormat::S16P => Av::AV_SAMPLE_FMT_S16P,
        SampleFormat::S32P => Av::AV_SAMPLE_FMT_S32P,
        SampleFormat::S64P => Av::AV_SAMPLE_FMT_S64P,
        SampleFormat::F32P => Av::AV_SAMPLE_FMT_FLTP,
        SampleFormat::F64P => Av::AV_SAMPLE_FMT_DBLP,
    }
}

fn to_c_int(samples: usize) -> Result<c_int> {
    c_int::try_from(samples)
        .map_err(|_| Error::invalid_layout(format!("{samples} samples exceed a single call")))
}

fn av_error(code: c_int) -> String {
    ffmpeg_next::Error::from(code).to_string()
}

static_assertions::assert_impl_all!(SwrConverter: Send);
static_assertions::assert_not_impl_any!(SwrConverter: Sync);
