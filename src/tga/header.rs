//! Fixed 18-byte TGA header and optional 26-byte footer.

use alloc::format;

use crate::error::TgaError;
use crate::pixel::PixelDepth;

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: usize = 18;
/// Size of the optional trailing footer in bytes.
pub const FOOTER_SIZE: usize = 26;
/// Signature stamped into footers written for sources that had none.
pub const FOOTER_SIGNATURE: [u8; 18] = *b"TRUEVISION-TARGA\0\0";

/// Offset between an RLE image type and its uncompressed counterpart.
const RLE_TYPE_OFFSET: u8 = 8;

/// Image data type code (header byte 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// No image data. Never accepted by the decoder.
    None,
    /// Palette indices.
    Index,
    /// Direct BGR(A) colour.
    FullColor,
    /// Grayscale.
    Gray,
    IndexRle,
    FullColorRle,
    GrayRle,
}

impl ImageType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::Index),
            2 => Some(Self::FullColor),
            3 => Some(Self::Gray),
            9 => Some(Self::IndexRle),
            10 => Some(Self::FullColorRle),
            11 => Some(Self::GrayRle),
            _ => None,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Index => 1,
            Self::FullColor => 2,
            Self::Gray => 3,
            Self::IndexRle => 9,
            Self::FullColorRle => 10,
            Self::GrayRle => 11,
        }
    }

    pub fn is_rle(self) -> bool {
        matches!(self, Self::IndexRle | Self::FullColorRle | Self::GrayRle)
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Index | Self::IndexRle)
    }

    pub fn is_gray(self) -> bool {
        matches!(self, Self::Gray | Self::GrayRle)
    }

    /// The type written out by the encoders, which never compress.
    pub fn uncompressed(self) -> Self {
        if self.is_rle() {
            Self::from_u8(self.to_u8() - RLE_TYPE_OFFSET).unwrap_or(self)
        } else {
            self
        }
    }
}

/// Scan-line orientation stored in bits 4 and 5 of the image descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanlineOrder {
    /// Left to right, bottom row first.
    LeftRightDownUp,
    /// Right to left, bottom row first.
    RightLeftDownUp,
    /// Left to right, top row first.
    LeftRightUpDown,
    /// Right to left, top row first.
    RightLeftUpDown,
}

impl ScanlineOrder {
    pub(crate) const HORIZONTAL_BIT: u8 = 0x10;
    pub(crate) const VERTICAL_BIT: u8 = 0x20;
    const MASK: u8 = Self::HORIZONTAL_BIT | Self::VERTICAL_BIT;

    pub fn from_descriptor(descriptor: u8) -> Self {
        match descriptor & Self::MASK {
            0x00 => Self::LeftRightDownUp,
            0x10 => Self::RightLeftDownUp,
            0x20 => Self::LeftRightUpDown,
            _ => Self::RightLeftUpDown,
        }
    }

    /// Descriptor bits for this orientation.
    pub fn bits(self) -> u8 {
        match self {
            Self::LeftRightDownUp => 0x00,
            Self::RightLeftDownUp => 0x10,
            Self::LeftRightUpDown => 0x20,
            Self::RightLeftUpDown => 0x30,
        }
    }

    pub fn is_right_to_left(self) -> bool {
        self.bits() & Self::HORIZONTAL_BIT != 0
    }

    pub fn is_top_down(self) -> bool {
        self.bits() & Self::VERTICAL_BIT != 0
    }
}

/// Parsed TGA header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaHeader {
    /// Length of the image ID field that follows the header.
    pub id_length: u8,
    pub has_palette: bool,
    /// Raw image type code; see [`ImageType`].
    pub image_type: u8,
    /// First palette entry index. Must be 0 when a palette is used.
    pub palette_start: u16,
    /// Number of palette entries.
    pub palette_len: u16,
    /// Bits per palette entry (24 or 32).
    pub palette_bits: u8,
    pub x_origin: u16,
    pub y_origin: u16,
    pub width: u16,
    pub height: u16,
    /// Bits per pixel (8, 16, 24 or 32).
    pub pixel_bits: u8,
    /// Image descriptor: bits 0-3 alpha depth, bits 4-5 scan-line orientation.
    pub descriptor: u8,
}

impl TgaHeader {
    /// Read the 18 header bytes and validate them.
    pub fn parse(data: &[u8]) -> Result<Self, TgaError> {
        let bytes: &[u8; HEADER_SIZE] = data
            .get(..HEADER_SIZE)
            .and_then(|b| b.try_into().ok())
            .ok_or_else(|| {
                TgaError::UnsupportedHeader(format!(
                    "need {HEADER_SIZE} header bytes, got {}",
                    data.len()
                ))
            })?;
        let header = Self::from_bytes(bytes);
        header.validate()?;
        Ok(header)
    }

    /// Unvalidated field split of the fixed little-endian layout.
    pub fn from_bytes(b: &[u8; HEADER_SIZE]) -> Self {
        let u16_at = |off: usize| u16::from_le_bytes([b[off], b[off + 1]]);
        Self {
            id_length: b[0],
            has_palette: b[1] != 0,
            image_type: b[2],
            palette_start: u16_at(3),
            palette_len: u16_at(5),
            palette_bits: b[7],
            x_origin: u16_at(8),
            y_origin: u16_at(10),
            width: u16_at(12),
            height: u16_at(14),
            pixel_bits: b[16],
            descriptor: b[17],
        }
    }

    /// Serialize the header. RLE types are written as their uncompressed
    /// equivalent since the encoders only emit raw data.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let image_type = match ImageType::from_u8(self.image_type) {
            Some(t) => t.uncompressed().to_u8(),
            None => self.image_type,
        };
        let mut out = [0u8; HEADER_SIZE];
        out[0] = self.id_length;
        out[1] = u8::from(self.has_palette);
        out[2] = image_type;
        out[3..5].copy_from_slice(&self.palette_start.to_le_bytes());
        out[5..7].copy_from_slice(&self.palette_len.to_le_bytes());
        out[7] = self.palette_bits;
        out[8..10].copy_from_slice(&self.x_origin.to_le_bytes());
        out[10..12].copy_from_slice(&self.y_origin.to_le_bytes());
        out[12..14].copy_from_slice(&self.width.to_le_bytes());
        out[14..16].copy_from_slice(&self.height.to_le_bytes());
        out[16] = self.pixel_bits;
        out[17] = self.descriptor;
        out
    }

    /// Check that the decoder can handle this header.
    ///
    /// The origin rule only rejects headers where *both* coordinates are
    /// non-zero; a single non-zero coordinate is accepted.
    pub fn validate(&self) -> Result<(), TgaError> {
        if self.x_origin != 0 && self.y_origin != 0 {
            log::debug!(
                "tga: rejecting origin ({}, {})",
                self.x_origin,
                self.y_origin
            );
            return Err(TgaError::UnsupportedHeader(format!(
                "non-zero origin ({}, {})",
                self.x_origin, self.y_origin
            )));
        }

        match ImageType::from_u8(self.image_type) {
            Some(ImageType::None) | None => {
                log::debug!("tga: rejecting image type {}", self.image_type);
                return Err(TgaError::UnsupportedHeader(format!(
                    "image type {}",
                    self.image_type
                )));
            }
            Some(_) => {}
        }

        if PixelDepth::from_bits(self.pixel_bits).is_none() {
            log::debug!("tga: rejecting pixel depth {}", self.pixel_bits);
            return Err(TgaError::UnsupportedHeader(format!(
                "{} bits per pixel",
                self.pixel_bits
            )));
        }

        if self.has_palette {
            if self.palette_start != 0 {
                return Err(TgaError::UnsupportedHeader(format!(
                    "palette starts at entry {}",
                    self.palette_start
                )));
            }
            if self.palette_bits != 24 && self.palette_bits != 32 {
                return Err(TgaError::UnsupportedHeader(format!(
                    "{} bits per palette entry",
                    self.palette_bits
                )));
            }
        }

        Ok(())
    }

    /// Image type, if the code is one of the known values.
    pub fn kind(&self) -> Option<ImageType> {
        ImageType::from_u8(self.image_type)
    }

    pub fn depth(&self) -> Option<PixelDepth> {
        PixelDepth::from_bits(self.pixel_bits)
    }

    pub fn orientation(&self) -> ScanlineOrder {
        ScanlineOrder::from_descriptor(self.descriptor)
    }

    /// Replace the orientation bits, keeping the alpha depth nibble.
    pub(crate) fn set_orientation(&mut self, order: ScanlineOrder) {
        self.descriptor = (self.descriptor & 0x0f) | order.bits();
    }

    /// Pixel buffer size in bytes, `None` on overflow.
    pub fn image_size(&self) -> Option<usize> {
        usize::from(self.width)
            .checked_mul(usize::from(self.height))?
            .checked_mul(usize::from(self.pixel_bits >> 3))
    }

    /// Palette buffer size in bytes; zero when no palette is declared.
    pub fn palette_size(&self) -> usize {
        if self.has_palette {
            usize::from(self.palette_len) * usize::from(self.palette_bits >> 3)
        } else {
            0
        }
    }
}

/// Optional TGA 2.0 footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TgaFooter {
    /// Offset of the extension area, 0 if absent.
    pub extension_offset: u32,
    /// Offset of the developer directory, 0 if absent.
    pub developer_offset: u32,
    /// Signature bytes. Not validated on read.
    pub signature: [u8; 18],
}

impl TgaFooter {
    pub fn from_bytes(b: &[u8; FOOTER_SIZE]) -> Self {
        let mut signature = [0u8; 18];
        signature.copy_from_slice(&b[8..]);
        Self {
            extension_offset: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            developer_offset: u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
            signature,
        }
    }

    /// Whether the source carried any signature bytes.
    pub fn has_signature(&self) -> bool {
        self.signature.iter().any(|&b| b != 0)
    }

    /// Serialize, stamping [`FOOTER_SIGNATURE`] when no signature is set.
    pub fn to_bytes(&self) -> [u8; FOOTER_SIZE] {
        let mut out = [0u8; FOOTER_SIZE];
        out[0..4].copy_from_slice(&self.extension_offset.to_le_bytes());
        out[4..8].copy_from_slice(&self.developer_offset.to_le_bytes());
        if self.has_signature() {
            out[8..].copy_from_slice(&self.signature);
        } else {
            out[8..].copy_from_slice(&FOOTER_SIGNATURE);
        }
        out
    }
}
