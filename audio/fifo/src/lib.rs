/*!
    Growable sample FIFO for the audio resample pipeline.

    A converter produces samples in whatever amounts the conversion library
    hands back, while an encoder wants exactly `frame_size` samples at a
    time. [`SampleFifo`] sits between the two: writes of any size are
    appended to the tail, and fixed-size reads are taken from the head.

    ```ignore
    use audio_fifo::SampleFifo;
    use audio_types::{ChannelLayout, SampleFormat};

    let mut fifo = SampleFifo::new(SampleFormat::S16, ChannelLayout::Stereo, 1024)?;

    fifo.write_buffer(&converted)?;
    while fifo.size() >= 1024 {
        let chunk = fifo.read_buffer(1024, 44100)?;
        // Send chunk to encoder
    }
    ```

    # Capacity

    The FIFO never needs to be pre-sized. A write that does not fit in the
    free space grows the storage to exactly the required capacity before
    copying. Storage never shrinks on its own; [`SampleFifo::clear`] keeps
    the allocation for reuse after a seek.

    # Underflow

    Reads, peeks and drains never return fewer samples than requested.
    Asking for more than is buffered fails with
    [`Error::Underflow`](audio_types::Error::Underflow) and leaves the FIFO
    untouched.
*/

pub use audio_types::{AudioBuffer, ChannelLayout, Error, Result, SampleFormat};

mod fifo;

pub use fifo::SampleFifo;
