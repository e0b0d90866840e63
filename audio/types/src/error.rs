/*!
    Error types for the audio resample pipeline.
*/

use thiserror::Error;

use crate::AudioParams;

/**
    Coarse classification of an [`Error`].

    Callers that only need to decide whether to fix their parameters,
    recreate the pipeline, or fix a logic bug can match on this instead
    of the individual variants.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Construction parameters or input format are unusable.
    Config,
    /// Backing storage could not be (re)allocated.
    Alloc,
    /// A request exceeded what is buffered, or a buffer had the wrong shape.
    Range,
    /// The conversion library failed mid-stream.
    Conversion,
}

/**
    Error type for the audio resample pipeline.
*/
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameters, or the conversion context could not be created.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// An input arrived with different parameters than the ones the
    /// conversion context was opened with.
    #[error("source format changed: expected {expected}, got {got}")]
    FormatChanged { expected: AudioParams, got: AudioParams },

    /// The pipeline was closed and can no longer be used.
    #[error("resampler is closed")]
    Closed,

    /// FIFO storage could not grow to the requested capacity.
    #[error("allocation failed: could not grow to {samples} samples")]
    Alloc { samples: usize },

    /// More samples were requested than are buffered.
    #[error("underflow: requested {requested} samples, {available} available")]
    Underflow { requested: usize, available: usize },

    /// A buffer had the wrong plane count or plane length.
    #[error("invalid buffer layout: {message}")]
    InvalidLayout { message: String },

    /// The conversion library reported a failure.
    #[error("conversion failed ({code}): {message}")]
    Conversion { code: i32, message: String },
}

impl Error {
    /**
        Create a configuration error with the given message.
    */
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /**
        Create an invalid layout error with the given message.
    */
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }

    /**
        Create a conversion error from a library return code and message.
    */
    pub fn conversion(code: i32, message: impl Into<String>) -> Self {
        Self::Conversion {
            code,
            message: message.into(),
        }
    }

    /**
        Returns the coarse kind of this error.
    */
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config { .. } | Self::FormatChanged { .. } | Self::Closed => ErrorKind::Config,
            Self::Alloc { .. } => ErrorKind::Alloc,
            Self::Underflow { .. } | Self::InvalidLayout { .. } => ErrorKind::Range,
            Self::Conversion { .. } => ErrorKind::Conversion,
        }
    }

    /**
        Returns true if this is an underflow error.
    */
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow { .. })
    }
}

/**
    Result type alias for the audio resample pipeline.
*/
pub type Result<T> = std::result::Result<T, Error>;
