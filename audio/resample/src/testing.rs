/*!
    Deterministic converters for exercising the pipeline without FFmpeg.
*/

use std::sync::atomic::{AtomicUsize, Ordering};

use audio_types::{AudioBuffer, AudioParams, Error, Result};

use crate::Converter;

/**
    Sample-and-hold rate converter.

    Only changes the sample rate: input sample `n` is repeated
    `floor((n + 1) * dst / src) - floor(n * dst / src)` times, so a
    1:1 rate copies input bit for bit. Output that does not fit is kept
    and handed out on later calls, like a real conversion context.
*/
pub(crate) struct StepConverter {
    source: AudioParams,
    target: AudioParams,
    stride: usize,
    pending: Vec<Vec<u8>>,
    consumed: u64,
}

impl StepConverter {
    fn pending_samples(&self) -> usize {
        self.pending.first().map_or(0, |p| p.len() / self.stride)
    }

    fn emit(&mut self, output: &mut AudioBuffer, hold: usize) -> usize {
        let samples = self
            .pending_samples()
            .saturating_sub(hold)
            .min(output.samples());
        let len = samples * self.stride;
        for (dst, src) in output.planes_mut().zip(&mut self.pending) {
            dst[..len].copy_from_slice(&src[..len]);
            src.drain(..len);
        }
        samples
    }

    fn new(source: AudioParams, target: AudioParams) -> Result<Self> {
        if source.format != target.format || source.layout != target.layout {
            return Err(Error::config(format!(
                "step converter cannot convert {source} to {target}"
            )));
        }
        let stride = target.format.plane_stride(target.channels());
        Ok(Self {
            source,
            target,
            stride,
            pending: vec![Vec::new(); target.format.plane_count(target.channels())],
            consumed: 0,
        })
    }

    fn accept(&mut self, input: Option<&AudioBuffer>) {
        if let Some(input) = input {
            let src = self.source.sample_rate as u64;
            let dst = self.target.sample_rate as u64;
            for n in 0..input.samples() {
                let index = self.consumed;
                let repeat = ((index + 1) * dst / src - index * dst / src) as usize;
                for (pending, plane) in self.pending.iter_mut().zip(input.planes()) {
                    let sample = &plane[n * self.stride..(n + 1) * self.stride];
                    for _ in 0..repeat {
                        pending.extend_from_slice(sample);
                    }
                }
                self.consumed += 1;
            }
        }
    }
}

impl Converter for StepConverter {
    fn open(source: AudioParams, target: AudioParams) -> Result<Self> {
        StepConverter::new(source, target)
    }

    fn convert(&mut self, output: &mut AudioBuffer, input: Option<&AudioBuffer>) -> Result<usize> {
        self.accept(input);
        Ok(self.emit(output, 0))
    }

    fn flush(&mut self, output: &mut AudioBuffer) -> Result<usize> {
        Ok(self.emit(output, 0))
    }

    fn delay(&self) -> usize {
        self.pending_samples()
    }
}

/**
    Converter whose every conversion fails, as a broken context would.
*/
pub(crate) struct FailingConverter;

impl Converter for FailingConverter {
    fn open(_source: AudioParams, _target: AudioParams) -> Result<Self> {
        Ok(Self)
    }

    fn convert(&mut self, _output: &mut AudioBuffer, _input: Option<&AudioBuffer>) -> Result<usize> {
        Err(Error::conversion(-5, "Input/output error"))
    }

    fn flush(&mut self, _output: &mut AudioBuffer) -> Result<usize> {
        Err(Error::conversion(-5, "Input/output error"))
    }

    fn delay(&self) -> usize {
        0
    }
}

/// Number of `CountingConverter` instances dropped so far.
pub(crate) static COUNTING_DROPS: AtomicUsize = AtomicUsize::new(0);

/**
    Step converter that records when it is dropped.
*/
pub(crate) struct CountingConverter(StepConverter);

impl Converter for CountingConverter {
    fn open(source: AudioParams, target: AudioParams) -> Result<Self> {
        StepConverter::open(source, target).map(Self)
    }

    fn convert(&mut self, output: &mut AudioBuffer, input: Option<&AudioBuffer>) -> Result<usize> {
        self.0.convert(output, input)
    }

    fn flush(&mut self, output: &mut AudioBuffer) -> Result<usize> {
        self.0.flush(output)
    }

    fn delay(&self) -> usize {
        self.0.delay()
    }
}

impl Drop for CountingConverter {
    fn drop(&mut self) {
        COUNTING_DROPS.fetch_add(1, Ordering::SeqCst);
    }
}

/// Samples a `LaggingConverter` keeps back until flushed.
pub(crate) const LAG: usize = 4;

/**
    Step converter that always holds back the last [`LAG`] samples, like
    the filter latency of a real resampler.
*/
pub(crate) struct LaggingConverter(StepConverter);

impl Converter for LaggingConverter {
    fn open(source: AudioParams, target: AudioParams) -> Result<Self> {
        StepConverter::new(source, target).map(Self)
    }

    fn convert(&mut self, output: &mut AudioBuffer, input: Option<&AudioBuffer>) -> Result<usize> {
        self.0.accept(input);
        Ok(self.0.emit(output, LAG))
    }

    fn flush(&mut self, output: &mut AudioBuffer) -> Result<usize> {
        Ok(self.0.emit(output, 0))
    }

    fn delay(&self) -> usize {
        self.0.delay()
    }
}
