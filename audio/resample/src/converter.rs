/*!
    The seam between the pipeline and the conversion library.
*/

use audio_types::{AudioBuffer, AudioParams, Result};

/**
    A conversion context turning audio in one set of [`AudioParams`] into
    another.

    Implementations may hold samples back (filter latency, or output that
    did not fit) and hand them out on later calls, so a single input can
    produce output across several calls. The [`Resampler`](crate::Resampler)
    keeps calling [`Converter::convert`] without new input until a call
    fills less than the whole output buffer.
*/
pub trait Converter: Sized {
    /**
        Open a context converting `source` into `target`.

        Fails with a configuration error if the pair is unsupported.
    */
    fn open(source: AudioParams, target: AudioParams) -> Result<Self>;

    /**
        Convert `input` into `output`, writing at most `output.samples()`
        samples per channel and returning how many were written.

        `None` feeds no new input and only drains what the context has
        buffered, without treating it as the end of the stream.
    */
    fn convert(&mut self, output: &mut AudioBuffer, input: Option<&AudioBuffer>) -> Result<usize>;

    /**
        Drain the context at end of stream, returning how many samples
        were written to `output`. Call repeatedly until it writes fewer
        samples than fit.
    */
    fn flush(&mut self, output: &mut AudioBuffer) -> Result<usize>;

    /**
        Samples currently held inside the context, in output samples.
    */
    fn delay(&self) -> usize;
}
