use alloc::format;

use crate::error::TgaError;
use crate::tga::TgaHeader;

/// Caps applied by [`crate::DecodeRequest`] before any buffer is allocated.
///
/// `None` means unlimited; `Limits::default()` limits nothing.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the pixel and palette buffers combined.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a parsed header's dimensions and buffer sizes.
    pub(crate) fn check(&self, header: &TgaHeader) -> Result<(), TgaError> {
        let (width, height) = (u32::from(header.width), u32::from(header.height));
        exceeds("width", u64::from(width), self.max_width.map(u64::from))?;
        exceeds("height", u64::from(height), self.max_height.map(u64::from))?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;

        let image = header
            .image_size()
            .ok_or(TgaError::DimensionsTooLarge { width, height })?;
        let total = image.saturating_add(header.palette_size());
        exceeds("buffer size", total as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, max: Option<u64>) -> Result<(), TgaError> {
    match max {
        Some(max) if value > max => {
            log::debug!("tga: {what} {value} over limit {max}");
            Err(TgaError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            )))
        }
        _ => Ok(()),
    }
}
