/*!
    Resampler configuration types.
*/

use audio_types::{AudioParams, ChannelLayout, Error, Result, SampleFormat};

/**
    Configuration for a [`Resampler`](crate::Resampler).

    Describes what the downstream consumer (usually an encoder) wants:
    the sample format, layout and rate to convert to, and how many
    samples per channel every emitted chunk must hold.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResamplerConfig {
    /// Output sample format.
    pub format: SampleFormat,
    /// Output channel layout.
    pub layout: ChannelLayout,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Samples per channel in every emitted chunk.
    pub frame_size: usize,
}

impl ResamplerConfig {
    /**
        Create a new resampler configuration.
    */
    pub fn new(
        format: SampleFormat,
        layout: ChannelLayout,
        sample_rate: u32,
        frame_size: usize,
    ) -> Self {
        Self {
            format,
            layout,
            sample_rate,
            frame_size,
        }
    }

    /**
        Create a configuration matching an AAC encoder:
        planar F32, stereo, 48kHz, 1024 samples per frame.
    */
    pub fn aac() -> Self {
        Self::new(SampleFormat::F32P, ChannelLayout::Stereo, 48000, 1024)
    }

    /**
        Create a configuration for audio playback:
        interleaved F32, stereo, 48kHz, 1024 samples per chunk.
    */
    pub fn playback() -> Self {
        Self::new(SampleFormat::F32, ChannelLayout::Stereo, 48000, 1024)
    }

    /**
        Set the output sample format.
    */
    pub fn with_format(mut self, format: SampleFormat) -> Self {
        self.format = format;
        self
    }

    /**
        Set the output channel layout.
    */
    pub fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    /**
        Set the output sample rate.
    */
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /**
        Set the number of samples per emitted chunk.
    */
    pub fn with_frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = frame_size;
        self
    }

    /**
        Output stream parameters.
    */
    pub fn params(&self) -> AudioParams {
        AudioParams::new(self.format, self.layout, self.sample_rate)
    }

    /**
        Check that this configuration can drive a resampler.
    */
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(Error::config("frame size must be greater than zero"));
        }
        if self.sample_rate == 0 {
            return Err(Error::config("sample rate must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for ResamplerConfig {
    fn default() -> Self {
        Self::playback()
    }
}
