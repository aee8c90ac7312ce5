use crate::error::TgaError;
use crate::pixel::{ChannelOrder, PixelLayout};
use crate::tga::{ImageType, ScanlineOrder, TgaHeader, layout_for};

/// Image properties read from the header alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct TgaInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    pub pixel_bits: u8,
    pub orientation: ScanlineOrder,
    /// Layout [`crate::Tga::pixels`] will have after decoding.
    pub native_layout: PixelLayout,
    /// Palette entries, 0 when the image has no palette.
    pub palette_len: u16,
}

impl TgaInfo {
    /// Probe the header without touching palette or pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let header = TgaHeader::parse(data)?;
        let image_type = header.kind().ok_or_else(|| {
            TgaError::UnsupportedHeader(alloc::format!("image type {}", header.image_type))
        })?;
        Ok(Self {
            width: u32::from(header.width),
            height: u32::from(header.height),
            image_type,
            pixel_bits: header.pixel_bits,
            orientation: header.orientation(),
            native_layout: layout_for(&header, ChannelOrder::Bgr),
            palette_len: if header.has_palette {
                header.palette_len
            } else {
                0
            },
        })
    }
}
