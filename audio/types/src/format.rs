/*!
    Sample format, channel layout and stream parameter types.
*/

use std::fmt;

/**
    Audio sample formats.

    Every sample type exists in a packed variant, where all channels are
    interleaved in a single plane, and a planar variant, where each channel
    has its own plane.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    /// Unsigned 8-bit integer, interleaved
    U8,
    /// Signed 16-bit integer, interleaved
    S16,
    /// Signed 32-bit integer, interleaved
    S32,
    /// Signed 64-bit integer, interleaved
    S64,
    /// 32-bit floating point, interleaved
    F32,
    /// 64-bit floating point, interleaved
    F64,
    /// Unsigned 8-bit integer, planar
    U8P,
    /// Signed 16-bit integer, planar
    S16P,
    /// Signed 32-bit integer, planar
    S32P,
    /// Signed 64-bit integer, planar
    S64P,
    /// 32-bit floating point, planar
    F32P,
    /// 64-bit floating point, planar
    F64P,
}

impl SampleFormat {
    /**
        Returns the number of bytes per sample of a single channel.
    */
    pub const fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 | Self::U8P => 1,
            Self::S16 | Self::S16P => 2,
            Self::S32 | Self::S32P | Self::F32 | Self::F32P => 4,
            Self::S64 | Self::S64P | Self::F64 | Self::F64P => 8,
        }
    }

    /**
        Returns true if each channel is stored in its own plane.
    */
    pub const fn is_planar(self) -> bool {
        matches!(
            self,
            Self::U8P | Self::S16P | Self::S32P | Self::S64P | Self::F32P | Self::F64P
        )
    }

    /**
        Returns true if this is a floating-point format.
    */
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64 | Self::F32P | Self::F64P)
    }

    /**
        Returns the interleaved variant of this sample type.
    */
    pub const fn packed(self) -> Self {
        match self {
            Self::U8 | Self::U8P => Self::U8,
            Self::S16 | Self::S16P => Self::S16,
            Self::S32 | Self::S32P => Self::S32,
            Self::S64 | Self::S64P => Self::S64,
            Self::F32 | Self::F32P => Self::F32,
            Self::F64 | Self::F64P => Self::F64,
        }
    }

    /**
        Returns the planar variant of this sample type.
    */
    pub const fn planar(self) -> Self {
        match self {
            Self::U8 | Self::U8P => Self::U8P,
            Self::S16 | Self::S16P => Self::S16P,
            Self::S32 | Self::S32P => Self::S32P,
            Self::S64 | Self::S64P => Self::S64P,
            Self::F32 | Self::F32P => Self::F32P,
            Self::F64 | Self::F64P => Self::F64P,
        }
    }

    /**
        Returns the number of planes a buffer of this format holds
        for the given channel count.
    */
    pub const fn plane_count(self, channels: u16) -> usize {
        if self.is_planar() {
            channels as usize
        } else {
            1
        }
    }

    /**
        Returns the number of bytes one sample occupies within a single
        plane: one channel for planar formats, all channels otherwise.
    */
    pub const fn plane_stride(self, channels: u16) -> usize {
        if self.is_planar() {
            self.bytes_per_sample()
        } else {
            self.bytes_per_sample() * channels as usize
        }
    }

    /**
        Short lowercase name of this format, e.g. `s16` or `f32p`.
    */
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::U8P => "u8p",
            Self::S16P => "s16p",
            Self::S32P => "s32p",
            Self::S64P => "s64p",
            Self::F32P => "f32p",
            Self::F64P => "f64p",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/**
    Audio channel layout.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Single channel
    Mono,
    /// Left and right channels
    Stereo,
    /// Stereo plus low-frequency effects
    Surround21,
    /// Front left/right plus back left/right
    Quad,
    /// 5.1 surround
    Surround51,
    /// 7.1 surround
    Surround71,
}

impl ChannelLayout {
    /**
        Returns the number of channels.
    */
    pub const fn channels(self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Surround21 => 3,
            Self::Quad => 4,
            Self::Surround51 => 6,
            Self::Surround71 => 8,
        }
    }

    /**
        Returns the default layout for a channel count, if there is one.
    */
    pub const fn from_channels(channels: u16) -> Option<Self> {
        match channels {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            3 => Some(Self::Surround21),
            4 => Some(Self::Quad),
            6 => Some(Self::Surround51),
            8 => Some(Self::Surround71),
            _ => None,
        }
    }

    /**
        Short lowercase name of this layout, e.g. `stereo` or `5.1`.
    */
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Stereo => "stereo",
            Self::Surround21 => "2.1",
            Self::Quad => "quad",
            Self::Surround51 => "5.1",
            Self::Surround71 => "7.1",
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/**
    Parameters describing an audio stream: sample format, channel layout
    and sample rate.

    A conversion context is opened for exactly one pair of these.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AudioParams {
    pub format: SampleFormat,
    pub layout: ChannelLayout,
    pub sample_rate: u32,
}

impl AudioParams {
    pub const fn new(format: SampleFormat, layout: ChannelLayout, sample_rate: u32) -> Self {
        Self {
            format,
            layout,
            sample_rate,
        }
    }

    /**
        Returns the number of channels.
    */
    pub const fn channels(&self) -> u16 {
        self.layout.channels()
    }
}

impl fmt::Display for AudioParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}Hz", self.format, self.layout, self.sample_rate)
    }
}
