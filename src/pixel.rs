/// Pixel memory layout of a decoded TGA buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 8-bit indices into the palette.
    Indexed8,
    /// Little-endian 16-bit indices into the palette.
    Indexed16,
    /// Packed little-endian 16-bit word: A1 R5 G5 B5 (blue in the low bits).
    Bgra5551,
    /// Packed little-endian 16-bit word: A1 B5 G5 R5 (red in the low bits).
    Rgba5551,
    /// 3 channels, 8-bit BGR (TGA native).
    Bgr8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit BGRA (TGA native).
    Bgra8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 | Self::Indexed8 => 1,
            Self::Indexed16 | Self::Bgra5551 | Self::Rgba5551 => 2,
            Self::Bgr8 | Self::Rgb8 => 3,
            Self::Bgra8 | Self::Rgba8 => 4,
        }
    }

    /// Whether colour lives in the palette rather than the pixel buffer.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed8 | Self::Indexed16)
    }
}

/// Order of the red and blue channels in pixel and palette buffers.
///
/// TGA stores BGR(A); [`crate::Tga::swap_channels`] toggles between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelOrder {
    #[default]
    Bgr,
    Rgb,
}

impl ChannelOrder {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Bgr => Self::Rgb,
            Self::Rgb => Self::Bgr,
        }
    }
}

/// Supported bits-per-pixel of the image data.
///
/// Every per-pixel loop dispatches on this instead of reinterpreting the
/// byte buffer; 16-bit pixels are addressed as whole 2-byte words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelDepth {
    Bits8,
    Bits16,
    Bits24,
    Bits32,
}

impl PixelDepth {
    /// Map a header bit count to a depth, if supported.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            8 => Some(Self::Bits8),
            16 => Some(Self::Bits16),
            24 => Some(Self::Bits24),
            32 => Some(Self::Bits32),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits() >> 3)
    }
}

/// Pixel types that can view a decoded TGA buffer directly.
#[cfg(feature = "rgb")]
pub trait TgaPixel: Copy + 'static {
    /// Layout a buffer must have to be viewed as this pixel type.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::alt::BGR8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgr8
    }
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::alt::BGRA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Bgra8
    }
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl TgaPixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
