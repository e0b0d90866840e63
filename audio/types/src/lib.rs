/*!
    Shared types for the audio resample pipeline.

    This crate defines the vocabulary that crosses crate boundaries. It has no
    dependency on FFmpeg, so the FIFO and any consumer of converted audio can
    depend on it without pulling in native bindings.

    # Format Types

    - [`SampleFormat`] - Audio sample formats, packed and planar
    - [`ChannelLayout`] - Audio channel layouts
    - [`AudioParams`] - Format, layout and rate of a stream

    # Buffers and Timing

    - [`AudioBuffer`] - A block of samples with its parameters
    - [`Pts`] and [`Rational`] - Per-sample timestamps and time bases

    # Error Handling

    - [`Error`], [`ErrorKind`] and [`Result`] - Common error types
*/

mod buffer;
mod error;
mod format;
mod timestamp;

pub use buffer::AudioBuffer;
pub use error::{Error, ErrorKind, Result};
pub use format::{AudioParams, ChannelLayout, SampleFormat};
pub use timestamp::{Pts, Rational};
