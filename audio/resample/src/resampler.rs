/*!
    Resampler: conversion context plus sample FIFO.
*/

use tracing::{debug, trace};

use audio_fifo::SampleFifo;
use audio_types::{AudioBuffer, AudioParams, Error, Pts, Result};

use crate::{Converter, ResamplerConfig};

/**
    Lifecycle of the conversion context.
*/
enum Session<C> {
    /// No input seen yet; the source format is unknown.
    Uninitialized,
    /// Opened from the first input's parameters, fixed from then on.
    Initialized { source: AudioParams, converter: C },
    /// Released by [`Resampler::close`].
    Closed,
}

/**
    Result of [`Resampler::convert_frame`].

    `out_samples + cached_samples == cur_samples` always holds.
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameOutput {
    /// The chunk popped by this call, if enough samples were buffered.
    pub frame: Option<AudioBuffer>,
    /// Samples buffered right after the push, before popping.
    pub cur_samples: usize,
    /// Samples handed out by this call.
    pub out_samples: usize,
    /// Samples still buffered after this call.
    pub cached_samples: usize,
}

/**
    Converts audio into fixed-size chunks of a fixed format.

    The conversion context is opened lazily from the parameters of the
    first pushed buffer. Converted samples collect in a [`SampleFifo`]
    until at least one chunk of `frame_size` samples is available.

    One resampler handles one stream: every input must have the same
    parameters as the first one, and calls must be made in stream order.
*/
pub struct Resampler<C: Converter> {
    session: Session<C>,
    fifo: SampleFifo,
    staging: AudioBuffer,
    config: ResamplerConfig,
    next_pts: Option<Pts>,
}

impl<C: Converter> Resampler<C> {
    /**
        Create a new resampler.

        The conversion context is not opened until the first push.
    */
    pub fn new(config: ResamplerConfig) -> Result<Self> {
        config.validate()?;

        let fifo = SampleFifo::new(config.format, config.layout, config.frame_size)?;
        let staging = AudioBuffer::silence(config.params(), config.frame_size);

        Ok(Self {
            session: Session::Uninitialized,
            fifo,
            staging,
            config,
            next_pts: None,
        })
    }

    pub fn config(&self) -> &ResamplerConfig {
        &self.config
    }

    /**
        Samples per channel in every chunk returned by [`pop`](Self::pop).
    */
    pub fn frame_size(&self) -> usize {
        self.config.frame_size
    }

    /**
        Source parameters learned from the first input, if any.
    */
    pub fn source(&self) -> Option<AudioParams> {
        match &self.session {
            Session::Initialized { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.session, Session::Initialized { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.session, Session::Closed)
    }

    /**
        The conversion context, once opened.
    */
    pub fn converter(&self) -> Option<&C> {
        match &self.session {
            Session::Initialized { converter, .. } => Some(converter),
            _ => None,
        }
    }

    /**
        Samples converted but not yet popped.
    */
    pub fn cached_samples(&self) -> usize {
        self.fifo.size()
    }

    /**
        Samples held inside the conversion context, not yet in the FIFO.
    */
    pub fn delay(&self) -> usize {
        self.converter().map_or(0, Converter::delay)
    }

    /**
        Convert `input` and append the result to the FIFO.

        Keeps draining the conversion context until it returns less than a
        full staging buffer, so everything the context can emit for this
        input ends up in the FIFO. Returns the number of buffered samples.
    */
    pub fn push(&mut self, input: &AudioBuffer) -> Result<usize> {
        self.open_session(input.params())?;
        let anchor = self.input_anchor(input);

        let Session::Initialized { converter, .. } = &mut self.session else {
            return Err(Error::Closed);
        };

        let capacity = self.staging.samples();
        let mut next = Some(input);
        loop {
            let produced = converter.convert(&mut self.staging, next.take())?;
            self.fifo.write(self.staging.planes(), produced)?;
            if produced < capacity {
                break;
            }
        }
        if anchor.is_some() {
            self.next_pts = anchor;
        }

        trace!(
            input = input.samples(),
            cached = self.fifo.size(),
            "resampler push"
        );
        Ok(self.fifo.size())
    }

    /**
        Remove exactly one chunk of `frame_size` samples from the FIFO.

        Fails with an underflow error, leaving the FIFO untouched, if
        fewer samples are buffered.
    */
    pub fn pop(&mut self) -> Result<AudioBuffer> {
        self.check_open()?;

        let frame_size = self.config.frame_size;
        let mut chunk = self.fifo.read_buffer(frame_size, self.config.sample_rate)?;
        chunk.set_pts(self.take_pts(frame_size));
        Ok(chunk)
    }

    /**
        Push `input` and return an iterator over every complete chunk.

        The push happens immediately, so conversion errors are returned
        here. The iterator pops lazily; chunks it does not reach stay
        buffered for the next call.
    */
    pub fn convert(&mut self, input: &AudioBuffer) -> Result<Chunks<'_, C>> {
        self.push(input)?;
        Ok(Chunks {
            resampler: self,
            failed: false,
        })
    }

    /**
        Push `input` and pop at most one chunk.
    */
    pub fn convert_frame(&mut self, input: &AudioBuffer) -> Result<FrameOutput> {
        let cur_samples = self.push(input)?;

        let frame = if cur_samples >= self.config.frame_size {
            Some(self.pop()?)
        } else {
            None
        };

        let cached_samples = self.fifo.size();
        Ok(FrameOutput {
            frame,
            cur_samples,
            out_samples: cur_samples - cached_samples,
            cached_samples,
        })
    }

    /**
        Drain everything at end of stream.

        Flushes the conversion context into the FIFO, then returns every
        complete chunk followed by one shorter chunk holding the remainder.
        The FIFO is empty afterwards.
    */
    pub fn flush(&mut self) -> Result<Vec<AudioBuffer>> {
        self.check_open()?;

        if let Session::Initialized { converter, .. } = &mut self.session {
            let capacity = self.staging.samples();
            loop {
                let produced = converter.flush(&mut self.staging)?;
                self.fifo.write(self.staging.planes(), produced)?;
                if produced < capacity {
                    break;
                }
            }
        }

        let mut chunks = Vec::with_capacity(self.fifo.size().div_ceil(self.config.frame_size));
        while self.fifo.size() >= self.config.frame_size {
            chunks.push(self.pop()?);
        }

        let remaining = self.fifo.size();
        if remaining > 0 {
            let mut chunk = self.fifo.read_buffer(remaining, self.config.sample_rate)?;
            chunk.set_pts(self.take_pts(remaining));
            chunks.push(chunk);
        }

        debug!(chunks = chunks.len(), "resampler flushed");
        Ok(chunks)
    }

    /**
        Discard buffered samples, e.g. after a seek.

        The learned source format and the conversion context are kept.
    */
    pub fn clear_cache(&mut self) {
        debug!(discarded = self.fifo.size(), "resampler cache cleared");
        self.fifo.clear();
        self.next_pts = None;
    }

    /**
        Release the conversion context, then the FIFO storage.

        Safe to call more than once; also runs on drop. Every other
        operation fails with [`Error::Closed`] afterwards.
    */
    pub fn close(&mut self) {
        if self.is_closed() {
            return;
        }

        self.session = Session::Closed;
        self.fifo.release();
        self.staging = AudioBuffer::silence(self.config.params(), 0);
        self.next_pts = None;

        debug!("resampler closed");
    }

    fn check_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn open_session(&mut self, source: AudioParams) -> Result<()> {
        match &self.session {
            Session::Closed => return Err(Error::Closed),
            Session::Initialized { source: learned, .. } => {
                if *learned != source {
                    return Err(Error::FormatChanged {
                        expected: *learned,
                        got: source,
                    });
                }
                return Ok(());
            }
            Session::Uninitialized => {}
        }

        if source.sample_rate == 0 {
            return Err(Error::config("source sample rate must be greater than zero"));
        }

        let target = self.config.params();
        let converter = C::open(source, target)?;
        debug!(%source, %target, "conversion context opened");

        self.session = Session::Initialized { source, converter };
        Ok(())
    }

    /**
        Output timestamp anchor from the first timestamped input.

        Output emitted before this input's samples, whether already in the
        FIFO or still held by the converter, precedes it in time. Only
        committed once the push succeeds.
    */
    fn input_anchor(&self, input: &AudioBuffer) -> Option<Pts> {
        if self.next_pts.is_some() {
            return None;
        }
        let pts = input.pts()?;
        let rescaled = pts.rescale(input.sample_rate(), self.config.sample_rate);
        let ahead = self.fifo.size() + self.delay();
        Some(Pts(rescaled.0.saturating_sub(ahead as i64)))
    }

    fn take_pts(&mut self, samples: usize) -> Option<Pts> {
        let pts = self.next_pts?;
        self.next_pts = Some(pts.advance(samples));
        Some(pts)
    }
}

impl<C: Converter> Drop for Resampler<C> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<C: Converter> std::fmt::Debug for Resampler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resampler")
            .field("config", &self.config)
            .field("source", &self.source())
            .field("closed", &self.is_closed())
            .field("cached_samples", &self.fifo.size())
            .finish_non_exhaustive()
    }
}

/**
    Iterator over the complete chunks buffered by a [`Resampler`].

    Returned by [`Resampler::convert`].
*/
pub struct Chunks<'a, C: Converter> {
    resampler: &'a mut Resampler<C>,
    failed: bool,
}

impl<C: Converter> std::fmt::Debug for Chunks<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunks")
            .field("cached_samples", &self.resampler.cached_samples())
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl<C: Converter> Iterator for Chunks<'_, C> {
    type Item = Result<AudioBuffer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.resampler.cached_samples() < self.resampler.frame_size() {
            return None;
        }
        let chunk = self.resampler.pop();
        self.failed = chunk.is_err();
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let n = self.resampler.cached_samples() / self.resampler.frame_size();
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::testing::{
        COUNTING_DROPS, CountingConverter, FailingConverter, LAG, LaggingConverter, StepConverter,
    };
    use audio_types::{ChannelLayout, ErrorKind, SampleFormat};

    const S16_STEREO_44K: AudioParams =
        AudioParams::new(SampleFormat::S16, ChannelLayout::Stereo, 44100);

    fn s16_stereo(frame_size: usize) -> Resampler<StepConverter> {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, frame_size);
        Resampler::new(config).unwrap()
    }

    /// Interleaved stereo where sample `i` holds `(first + i, -(first + i))`.
    fn ramp(params: AudioParams, first: i16, samples: usize) -> AudioBuffer {
        let data: Vec<i16> = (0..samples)
            .flat_map(|i| {
                let v = first.wrapping_add(i as i16);
                [v, v.wrapping_neg()]
            })
            .collect();
        AudioBuffer::from_interleaved(params, &data).unwrap()
    }

    #[test]
    fn passthrough_yields_identical_chunk() {
        let mut resampler = s16_stereo(1024);
        let input = ramp(S16_STEREO_44K, 0, 1024);

        let chunks: Vec<_> = resampler
            .convert(&input)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].samples(), 1024);
        assert_eq!(chunks[0].planes(), input.planes());
        assert_eq!(resampler.cached_samples(), 0);
    }

    #[test]
    fn short_inputs_accumulate_into_one_chunk() {
        let mut resampler = s16_stereo(1024);

        let first = ramp(S16_STEREO_44K, 0, 500);
        assert_eq!(resampler.convert(&first).unwrap().count(), 0);
        assert_eq!(resampler.cached_samples(), 500);

        let second = ramp(S16_STEREO_44K, 500, 600);
        let chunks: Vec<_> = resampler
            .convert(&second)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(resampler.cached_samples(), 76);

        // Chunk continues seamlessly from the first input into the second
        let expected = ramp(S16_STEREO_44K, 0, 1024);
        assert_eq!(chunks[0].planes(), expected.planes());
    }

    #[test]
    fn large_input_yields_many_chunks_in_order() {
        let mut resampler = s16_stereo(256);
        let input = ramp(S16_STEREO_44K, 0, 1000);

        let chunks = resampler.convert(&input).unwrap();
        assert_eq!(chunks.size_hint(), (3, Some(3)));
        let chunks: Vec<_> = chunks.collect::<Result<_>>().unwrap();
        assert_eq!(chunks.len(), 3);
        for (i, chunk) in chunks.iter().enumerate() {
            let expected = ramp(S16_STEREO_44K, (i * 256) as i16, 256);
            assert_eq!(chunk.planes(), expected.planes());
        }
        assert_eq!(resampler.cached_samples(), 1000 - 3 * 256);
    }

    #[test]
    fn unconsumed_chunks_stay_buffered() {
        let mut resampler = s16_stereo(100);
        let first = resampler
            .convert(&ramp(S16_STEREO_44K, 0, 300))
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(first.plane_to_vec::<i16>(0).unwrap()[0], 0);
        assert_eq!(resampler.cached_samples(), 200);

        let chunks: Vec<_> = resampler
            .convert(&ramp(S16_STEREO_44K, 300, 100))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        let starts: Vec<i16> = chunks
            .iter()
            .map(|c| c.plane_to_vec::<i16>(0).unwrap()[0])
            .collect();
        assert_eq!(starts, [100, 200, 300]);
    }

    #[test]
    fn pop_underflow_leaves_fifo_unchanged() {
        let mut resampler = s16_stereo(1024);
        resampler.push(&ramp(S16_STEREO_44K, 0, 500)).unwrap();

        let err = resampler.pop().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.is_underflow());
        assert_eq!(resampler.cached_samples(), 500);
    }

    #[test]
    fn convert_frame_reports_sample_accounting() {
        // 10000 -> 9000 Hz turns every 1000 input samples into 900
        let source = AudioParams::new(SampleFormat::S16, ChannelLayout::Stereo, 10000);
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 9000, 1000);
        let mut resampler = Resampler::<StepConverter>::new(config).unwrap();

        let first = resampler.convert_frame(&ramp(source, 0, 1000)).unwrap();
        assert!(first.frame.is_none());
        assert_eq!(first.cur_samples, 900);
        assert_eq!(first.out_samples, 0);
        assert_eq!(first.cached_samples, 900);

        let second = resampler.convert_frame(&ramp(source, 1000, 1000)).unwrap();
        assert_eq!(second.frame.as_ref().map(AudioBuffer::samples), Some(1000));
        assert_eq!(second.cur_samples, 1800);
        assert_eq!(second.out_samples, 1000);
        assert_eq!(second.cached_samples, 800);

        for output in [&first, &second] {
            assert_eq!(output.out_samples + output.cached_samples, output.cur_samples);
        }
    }

    #[test]
    fn unchanged_rate_conserves_samples() {
        let mut resampler = s16_stereo(333);
        let sizes = [100, 1024, 7, 500, 2048, 1];

        let mut pushed = 0;
        let mut emitted = 0;
        for (i, &n) in sizes.iter().enumerate() {
            let input = ramp(S16_STEREO_44K, i as i16, n);
            pushed += n;
            for chunk in resampler.convert(&input).unwrap() {
                emitted += chunk.unwrap().samples();
            }
        }
        assert_eq!(emitted + resampler.cached_samples(), pushed);
    }

    #[test]
    fn context_overflow_is_drained_into_fifo() {
        // A 4x upsample produces far more than one staging buffer per input
        let source = AudioParams::new(SampleFormat::S16, ChannelLayout::Stereo, 11025);
        let mut resampler = s16_stereo(64);

        let cached = resampler.push(&ramp(source, 0, 100)).unwrap();
        assert_eq!(cached, 400);
        assert_eq!(resampler.delay(), 0);
    }

    #[test]
    fn rejects_changed_source_format() {
        let mut resampler = s16_stereo(1024);
        resampler.push(&ramp(S16_STEREO_44K, 0, 10)).unwrap();

        let other = AudioParams::new(SampleFormat::S16, ChannelLayout::Stereo, 48000);
        let err = resampler.push(&ramp(other, 0, 10)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(matches!(err, Error::FormatChanged { expected, got }
            if expected == S16_STEREO_44K && got == other));

        assert_eq!(resampler.source(), Some(S16_STEREO_44K));
        assert_eq!(resampler.cached_samples(), 10);
    }

    #[test]
    fn unsupported_pair_is_config_error() {
        let mut resampler = s16_stereo(1024);
        let mono = AudioBuffer::silence(
            AudioParams::new(SampleFormat::S16, ChannelLayout::Mono, 44100),
            10,
        );
        let err = resampler.push(&mono).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(!resampler.is_initialized());
    }

    #[test]
    fn conversion_errors_propagate() {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, 16);
        let mut resampler = Resampler::<FailingConverter>::new(config).unwrap();

        let err = resampler.convert(&ramp(S16_STEREO_44K, 0, 16)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conversion);
        assert!(matches!(err, Error::Conversion { code: -5, .. }));
        assert_eq!(resampler.flush().unwrap_err().kind(), ErrorKind::Conversion);
    }

    #[test]
    fn flush_returns_remainder() {
        let mut resampler = s16_stereo(100);
        resampler.push(&ramp(S16_STEREO_44K, 0, 250)).unwrap();

        let chunks = resampler.flush().unwrap();
        let sizes: Vec<usize> = chunks.iter().map(AudioBuffer::samples).collect();
        assert_eq!(sizes, [100, 100, 50]);
        assert_eq!(resampler.cached_samples(), 0);
    }

    #[test]
    fn flush_before_any_input_is_empty() {
        let mut resampler = s16_stereo(100);
        assert!(resampler.flush().unwrap().is_empty());
        assert!(!resampler.is_initialized());
    }

    #[test]
    fn clear_cache_keeps_learned_source() {
        let mut resampler = s16_stereo(1024);
        resampler.push(&ramp(S16_STEREO_44K, 0, 700)).unwrap();

        resampler.clear_cache();
        assert_eq!(resampler.cached_samples(), 0);
        assert_eq!(resampler.source(), Some(S16_STEREO_44K));

        resampler.push(&ramp(S16_STEREO_44K, 0, 1024)).unwrap();
        assert_eq!(resampler.pop().unwrap().samples(), 1024);
    }

    #[test]
    fn timestamps_follow_output_samples() {
        let source = AudioParams::new(SampleFormat::S16, ChannelLayout::Stereo, 22050);
        let mut resampler = s16_stereo(1000);

        // 22050 -> 44100 doubles every sample; pts 500 becomes 1000
        let input = ramp(source, 0, 1000).with_pts(Some(Pts(500)));
        let chunks: Vec<_> = resampler
            .convert(&input)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        let pts: Vec<_> = chunks.iter().map(AudioBuffer::pts).collect();
        assert_eq!(pts, [Some(Pts(1000)), Some(Pts(2000))]);

        resampler.clear_cache();
        let input = ramp(source, 0, 500).with_pts(Some(Pts(10_000)));
        let chunk = resampler.convert(&input).unwrap().next().unwrap().unwrap();
        assert_eq!(chunk.pts(), Some(Pts(20_000)));
    }

    #[test]
    fn failed_push_does_not_anchor_timestamps() {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, 16);
        let mut resampler = Resampler::<FailingConverter>::new(config).unwrap();

        let input = ramp(S16_STEREO_44K, 0, 16).with_pts(Some(Pts(500)));
        assert!(resampler.push(&input).is_err());
        assert_eq!(resampler.next_pts, None);
    }

    #[test]
    fn timestamps_account_for_buffered_samples() {
        // 44100 -> 22050 halves the sample count
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 22050, 10);
        let mut resampler = Resampler::<StepConverter>::new(config).unwrap();
        resampler.push(&ramp(S16_STEREO_44K, 0, 30)).unwrap();
        assert_eq!(resampler.cached_samples(), 15);

        // Untimed samples already buffered precede the timed input
        let input = ramp(S16_STEREO_44K, 30, 30).with_pts(Some(Pts(60)));
        resampler.push(&input).unwrap();
        assert_eq!(resampler.pop().unwrap().pts(), Some(Pts(15)));
        assert_eq!(resampler.pop().unwrap().pts(), Some(Pts(25)));
    }

    #[test]
    fn timestamps_account_for_converter_delay() {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, 10);
        let mut resampler = Resampler::<LaggingConverter>::new(config).unwrap();
        resampler.push(&ramp(S16_STEREO_44K, 0, 20)).unwrap();
        assert_eq!(resampler.cached_samples(), 20 - LAG);
        assert_eq!(resampler.delay(), LAG);

        // Samples held by the converter also precede the timed input
        let input = ramp(S16_STEREO_44K, 20, 10).with_pts(Some(Pts(20)));
        resampler.push(&input).unwrap();
        assert_eq!(resampler.pop().unwrap().pts(), Some(Pts(0)));
        assert_eq!(resampler.pop().unwrap().pts(), Some(Pts(10)));
    }

    #[test]
    fn untimed_input_gives_untimed_output() {
        let mut resampler = s16_stereo(10);
        let chunk = resampler
            .convert(&ramp(S16_STEREO_44K, 0, 10))
            .unwrap()
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(chunk.pts(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, 64);
        let mut resampler = Resampler::<CountingConverter>::new(config).unwrap();
        resampler.push(&ramp(S16_STEREO_44K, 0, 10)).unwrap();

        let before = COUNTING_DROPS.load(Ordering::SeqCst);
        resampler.close();
        resampler.close();
        assert_eq!(COUNTING_DROPS.load(Ordering::SeqCst), before + 1);
        assert!(resampler.is_closed());
        assert_eq!(resampler.cached_samples(), 0);

        drop(resampler);
        assert_eq!(COUNTING_DROPS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn operations_after_close_fail() {
        let mut resampler = s16_stereo(64);
        resampler.close();

        let input = ramp(S16_STEREO_44K, 0, 64);
        assert!(matches!(resampler.push(&input), Err(Error::Closed)));
        assert!(matches!(resampler.pop(), Err(Error::Closed)));
        assert!(matches!(resampler.flush(), Err(Error::Closed)));
        assert!(resampler.convert(&input).is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ResamplerConfig::new(SampleFormat::S16, ChannelLayout::Stereo, 44100, 0);
        let err = Resampler::<StepConverter>::new(config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    static_assertions::assert_impl_all!(Resampler<StepConverter>: Send, Sync);
}
