use alloc::string::String;
use enough::StopReason;

/// Errors from QOI decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QoiError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid channel count: {0} (expected 3 or 4)")]
    InvalidChannelCount(u8),

    #[error("invalid colorspace value: {0} (expected 0 or 1)")]
    InvalidColorspace(u8),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::Channels,
        actual: crate::Channels,
    },

    #[error("null buffer pointer with nonzero length")]
    NullPointer,

    #[error("allocation of {0} bytes failed")]
    AllocationFailed(usize),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for QoiError {
    fn from(r: StopReason) -> Self {
        QoiError::Cancelled(r)
    }
}
