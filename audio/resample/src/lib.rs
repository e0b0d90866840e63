/*!
    Audio resampling and rebuffering into fixed-size frames.

    Decoders produce audio in whatever format, layout, rate and frame size
    the codec dictates. Encoders want one fixed format and exactly
    `frame_size` samples per frame. A [`Resampler`] bridges the two: it
    converts every pushed buffer through a [`Converter`] and collects the
    result in a [`SampleFifo`](audio_fifo::SampleFifo), from which complete
    chunks are popped.

    ```ignore
    use audio_resample::{ResamplerConfig, SwrResampler};

    // Feed an AAC encoder: planar F32, stereo, 48kHz, 1024-sample frames
    let mut resampler = SwrResampler::new(ResamplerConfig::aac())?;

    for frame in decoded_frames {
        for chunk in resampler.convert(&frame)? {
            encoder.encode(&chunk?)?;
        }
    }

    // Drain the tail at end of stream; the last chunk may be short
    for chunk in resampler.flush()? {
        encoder.encode(&chunk)?;
    }
    ```

    # Lazy Initialization

    The conversion context is opened on the first push, from that buffer's
    parameters. It is fixed from then on: a later buffer with different
    parameters is rejected with
    [`Error::FormatChanged`](audio_types::Error::FormatChanged) instead of
    being fed to a context opened for something else. Streams that change
    format need a new resampler.

    # Statefulness

    Conversion keeps filter history and may hold samples back, and the FIFO
    carries leftovers from one call into the next. Buffers must be pushed
    in stream order. Call [`Resampler::clear_cache`] after seeking and
    [`Resampler::flush`] at end of stream.

    # Backends

    With the `ffmpeg` feature (enabled by default), [`SwrConverter`]
    converts through libswresample. Other backends implement [`Converter`].
*/

pub use audio_types::{
    AudioBuffer, AudioParams, ChannelLayout, Error, ErrorKind, Pts, Result, SampleFormat,
};

mod config;
mod converter;
mod resampler;
#[cfg(feature = "ffmpeg")]
mod swr;
#[cfg(test)]
mod testing;

pub use config::ResamplerConfig;
pub use converter::Converter;
pub use resampler::{Chunks, FrameOutput, Resampler};
#[cfg(feature = "ffmpeg")]
pub use swr::SwrConverter;

/**
    A [`Resampler`] converting through libswresample.
*/
#[cfg(feature = "ffmpeg")]
pub type SwrResampler = Resampler<SwrConverter>;
