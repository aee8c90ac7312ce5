use alloc::string::String;
use enough::StopReason;

/// Errors from TGA decoding and TGA/BMP encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    /// Source file could not be opened or read.
    #[cfg(feature = "std")]
    #[error("cannot read source: {0}")]
    Open(#[source] std::io::Error),

    #[error("buffer allocation failed: {0}")]
    Allocation(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unsupported header: {0}")]
    UnsupportedHeader(String),

    #[error("unsupported palette: {0}")]
    UnsupportedPalette(String),

    #[error("unsupported image data: {0}")]
    UnsupportedImage(String),

    /// Destination could not be written.
    #[cfg(feature = "std")]
    #[error("cannot write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse error classification, one value per failure class a caller
/// would report differently.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Open,
    Allocation,
    UnsupportedHeader,
    UnsupportedPalette,
    UnsupportedImage,
    Output,
    Cancelled,
}

impl TgaError {
    /// Which failure class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            TgaError::Open(_) => ErrorKind::Open,
            TgaError::Allocation(_)
            | TgaError::DimensionsTooLarge { .. }
            | TgaError::LimitExceeded(_) => ErrorKind::Allocation,
            TgaError::UnsupportedHeader(_) => ErrorKind::UnsupportedHeader,
            TgaError::UnsupportedPalette(_) => ErrorKind::UnsupportedPalette,
            TgaError::UnsupportedImage(_) => ErrorKind::UnsupportedImage,
            #[cfg(feature = "std")]
            TgaError::Output(_) => ErrorKind::Output,
            TgaError::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
