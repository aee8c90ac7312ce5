//! TGA image: decoding, orientation and channel conversion, re-encoding.
//!
//! Supported inputs: image types 1-3 (indexed, truecolour, grayscale) and
//! their RLE variants 9-11, 8/16/24/32 bits per pixel, 24/32-bit palettes
//! starting at entry 0. Output is always uncompressed.

mod encode;
mod header;
mod palette;
mod rle;
mod scanline;
mod swap;

pub use header::{
    FOOTER_SIGNATURE, FOOTER_SIZE, HEADER_SIZE, ImageType, ScanlineOrder, TgaFooter, TgaHeader,
};

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::pixel::{ChannelOrder, PixelDepth, PixelLayout};

/// A decoded TGA image.
///
/// Owns its header, footer, image ID, pixel buffer and optional palette.
/// A default-constructed `Tga` is empty; the `load*` methods populate it
/// and [`Tga::release`] empties it again. A failed load leaves it empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tga {
    loaded: bool,
    header: TgaHeader,
    footer: TgaFooter,
    image_id: Vec<u8>,
    pixels: Vec<u8>,
    palette: Option<Vec<u8>>,
    order: ChannelOrder,
}

impl Tga {
    /// An empty image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode TGA file bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        decode(data, None, &enough::Unstoppable)
    }

    /// Build an image from already-decoded buffers.
    ///
    /// `pixels` must hold exactly `width * height * bytes_per_pixel` bytes.
    /// `palette` must be present exactly when the header declares one, and
    /// hold `palette_len * palette_bits / 8` bytes. The image has no ID
    /// field, so `id_length` is reset to 0.
    pub fn from_parts(
        mut header: TgaHeader,
        pixels: Vec<u8>,
        palette: Option<Vec<u8>>,
    ) -> Result<Self, TgaError> {
        if pixels.is_empty() {
            return Err(TgaError::UnsupportedImage("empty pixel buffer".into()));
        }
        match &palette {
            Some(p) if p.is_empty() => {
                return Err(TgaError::UnsupportedPalette("empty palette buffer".into()));
            }
            Some(p) if !header.has_palette || p.len() != header.palette_size() => {
                return Err(TgaError::UnsupportedPalette(format!(
                    "palette of {} bytes does not match header ({} bytes)",
                    p.len(),
                    header.palette_size()
                )));
            }
            None if header.has_palette => {
                return Err(TgaError::UnsupportedPalette(
                    "header declares a palette but none was given".into(),
                ));
            }
            _ => {}
        }

        header.validate()?;

        let expected = header.image_size().ok_or(TgaError::DimensionsTooLarge {
            width: u32::from(header.width),
            height: u32::from(header.height),
        })?;
        if pixels.len() != expected {
            return Err(TgaError::UnsupportedImage(format!(
                "pixel buffer is {} bytes, header needs {expected}",
                pixels.len()
            )));
        }

        header.id_length = 0;
        Ok(Self {
            loaded: true,
            header,
            footer: TgaFooter::default(),
            image_id: Vec::new(),
            pixels,
            palette,
            order: ChannelOrder::Bgr,
        })
    }

    /// Replace the contents with a decode of `data`.
    pub fn load(&mut self, data: &[u8]) -> Result<(), TgaError> {
        self.release();
        *self = Self::from_bytes(data)?;
        Ok(())
    }

    /// Replace the contents with caller-supplied buffers; see [`Tga::from_parts`].
    pub fn load_parts(
        &mut self,
        header: TgaHeader,
        pixels: Vec<u8>,
        palette: Option<Vec<u8>>,
    ) -> Result<(), TgaError> {
        self.release();
        *self = Self::from_parts(header, pixels, palette)?;
        Ok(())
    }

    /// Drop all buffers and reset header and footer. No-op when empty.
    pub fn release(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        !self.loaded
    }

    pub fn header(&self) -> &TgaHeader {
        &self.header
    }

    pub fn footer(&self) -> &TgaFooter {
        &self.footer
    }

    pub fn width(&self) -> u16 {
        self.header.width
    }

    pub fn height(&self) -> u16 {
        self.header.height
    }

    pub fn pixel_bits(&self) -> u8 {
        self.header.pixel_bits
    }

    pub fn palette_bits(&self) -> u8 {
        self.header.palette_bits
    }

    /// Number of palette entries declared by the header.
    pub fn palette_len(&self) -> u16 {
        self.header.palette_len
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn image_size(&self) -> usize {
        self.pixels.len()
    }

    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }

    pub fn palette_size(&self) -> usize {
        self.palette.as_ref().map_or(0, Vec::len)
    }

    /// Image ID field bytes carried between header and palette.
    pub fn image_id(&self) -> &[u8] {
        &self.image_id
    }

    pub fn orientation(&self) -> ScanlineOrder {
        self.header.orientation()
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    /// Memory layout of [`Tga::pixels`].
    pub fn layout(&self) -> PixelLayout {
        layout_for(&self.header, self.order)
    }

    /// Footer extension-area offset written by the encoder.
    pub fn set_extension_offset(&mut self, offset: u32) {
        self.footer.extension_offset = offset;
    }

    /// Footer developer-directory offset written by the encoder.
    pub fn set_developer_offset(&mut self, offset: u32) {
        self.footer.developer_offset = offset;
    }

    /// Toggle BGR(A) and RGB(A) order in the palette and pixel buffers.
    ///
    /// Index buffers are left alone. Calling this twice restores the
    /// original bytes.
    pub fn swap_channels(&mut self) -> Result<(), TgaError> {
        self.require_loaded()?;
        if let Some(palette) = self.palette.as_mut() {
            swap::swap_palette(palette, usize::from(self.header.palette_bits >> 3));
        }
        let indexed = self.header.kind().is_some_and(ImageType::is_indexed);
        if let Some(depth) = self.header.depth().filter(|_| !indexed) {
            swap::swap_pixels(&mut self.pixels, depth);
        }
        self.order = self.order.toggled();
        Ok(())
    }

    /// Reorder the pixel buffer to the given scan-line orientation and
    /// record it in the header descriptor.
    pub fn set_orientation(&mut self, target: ScanlineOrder) -> Result<(), TgaError> {
        self.require_loaded()?;
        let depth = self.depth()?;
        if let Some(pixels) = scanline::reorder(
            &self.pixels,
            usize::from(self.header.width),
            usize::from(self.header.height),
            depth,
            self.header.orientation(),
            target,
        ) {
            self.pixels = pixels;
        }
        self.header.set_orientation(target);
        Ok(())
    }

    /// Encode as an uncompressed TGA file with a footer.
    pub fn encode_tga(&self) -> Result<Vec<u8>, TgaError> {
        self.require_loaded()?;
        Ok(encode::encode_tga(
            &self.header,
            &self.image_id,
            self.palette.as_deref(),
            &self.pixels,
            &self.footer,
        ))
    }

    /// Encode as a BMP file.
    ///
    /// Reorders this image to [`ScanlineOrder::LeftRightDownUp`] first, which
    /// is BMP's bottom-up row order. Rows are not padded to 4 bytes. On error
    /// the image is unchanged.
    pub fn encode_bmp(&mut self) -> Result<Vec<u8>, TgaError> {
        self.require_loaded()?;
        crate::bmp::file_size(&self.header, self.palette.as_deref(), self.pixels.len())?;
        self.set_orientation(ScanlineOrder::LeftRightDownUp)?;
        crate::bmp::encode_bmp(&self.header, self.palette.as_deref(), &self.pixels)
    }

    /// Read and decode a TGA file.
    #[cfg(feature = "std")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, TgaError> {
        let data = std::fs::read(path).map_err(TgaError::Open)?;
        Self::from_bytes(&data)
    }

    /// Write [`Tga::encode_tga`] output to a file.
    #[cfg(feature = "std")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), TgaError> {
        let out = self.encode_tga()?;
        std::fs::write(path, out).map_err(TgaError::Output)
    }

    /// Write [`Tga::encode_bmp`] output to a file.
    #[cfg(feature = "std")]
    pub fn save_bmp(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), TgaError> {
        let out = self.encode_bmp()?;
        std::fs::write(path, out).map_err(TgaError::Output)
    }

    /// Reinterpret pixel data as a typed pixel slice.
    ///
    /// Returns [`TgaError::UnsupportedImage`] if the layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::TgaPixel>(&self) -> Result<&[P], TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout() != P::layout() {
            return Err(TgaError::UnsupportedImage(format!(
                "layout is {:?}, requested {:?}",
                self.layout(),
                P::layout()
            )));
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::TgaPixel>(&self) -> Result<imgref::ImgRef<'_, P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            usize::from(self.header.width),
            usize::from(self.header.height),
        ))
    }

    /// Copy into an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::TgaPixel>(&self) -> Result<imgref::ImgVec<P>, TgaError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            usize::from(self.header.width),
            usize::from(self.header.height),
        ))
    }

    fn require_loaded(&self) -> Result<(), TgaError> {
        if self.loaded {
            Ok(())
        } else {
            Err(TgaError::UnsupportedImage("no image loaded".into()))
        }
    }

    fn depth(&self) -> Result<PixelDepth, TgaError> {
        self.header.depth().ok_or_else(|| {
            TgaError::UnsupportedHeader(format!("{} bits per pixel", self.header.pixel_bits))
        })
    }
}

/// Pixel layout implied by a header and channel order.
///
/// Indexed images with 24- or 32-bit indices have no index layout and
/// report the byte layout of their depth.
pub(crate) fn layout_for(header: &TgaHeader, order: ChannelOrder) -> PixelLayout {
    let indexed = header.kind().is_some_and(ImageType::is_indexed);
    let rgb = order == ChannelOrder::Rgb && !indexed;
    match header.depth() {
        Some(PixelDepth::Bits8) | None if indexed => PixelLayout::Indexed8,
        Some(PixelDepth::Bits16) if indexed => PixelLayout::Indexed16,
        Some(PixelDepth::Bits8) | None => PixelLayout::Gray8,
        Some(PixelDepth::Bits16) if rgb => PixelLayout::Rgba5551,
        Some(PixelDepth::Bits16) => PixelLayout::Bgra5551,
        Some(PixelDepth::Bits24) if rgb => PixelLayout::Rgb8,
        Some(PixelDepth::Bits24) => PixelLayout::Bgr8,
        Some(PixelDepth::Bits32) if rgb => PixelLayout::Rgba8,
        Some(PixelDepth::Bits32) => PixelLayout::Bgra8,
    }
}

/// Full decode: header, sizes, palette, image data, footer.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Tga, TgaError> {
    let header = TgaHeader::parse(data)?;
    let width = u32::from(header.width);
    let height = u32::from(header.height);
    if let Some(limits) = limits {
        limits.check(&header)?;
    }

    let kind = header
        .kind()
        .ok_or_else(|| TgaError::UnsupportedHeader(format!("image type {}", header.image_type)))?;
    let image_size = header
        .image_size()
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;
    let palette_size = header.palette_size();
    stop.check()?;

    let id_end = HEADER_SIZE + usize::from(header.id_length);
    let image_id = data
        .get(HEADER_SIZE..id_end)
        .ok_or_else(|| TgaError::UnsupportedHeader("truncated image ID field".into()))?
        .to_vec();

    let palette = match palette::read(data, &header)? {
        Some(p) => Some(p),
        None if header.has_palette => Some(alloc_zeroed(palette_size)?),
        None => None,
    };

    let data_start = id_end + palette_size;
    let src = data.get(data_start..).ok_or_else(|| {
        TgaError::UnsupportedImage(format!(
            "image data starts at {data_start}, input is {} bytes",
            data.len()
        ))
    })?;

    let mut pixels = alloc_zeroed(image_size)?;
    let consumed = if kind.is_rle() {
        let bpp = usize::from(header.pixel_bits >> 3);
        rle::decode(&mut pixels, src, bpp, stop)?
    } else {
        let raw = src.get(..image_size).ok_or_else(|| {
            TgaError::UnsupportedImage(format!(
                "need {image_size} bytes of image data, got {}",
                src.len()
            ))
        })?;
        pixels.copy_from_slice(raw);
        image_size
    };

    let footer = if src.len() - consumed >= FOOTER_SIZE {
        let tail: &[u8; FOOTER_SIZE] = data[data.len() - FOOTER_SIZE..]
            .try_into()
            .map_err(|_| TgaError::UnsupportedImage("footer slice".into()))?;
        TgaFooter::from_bytes(tail)
    } else {
        TgaFooter::default()
    };

    log::debug!(
        "tga: decoded {width}x{height} type {} {} bpp, palette {} bytes, footer {}",
        header.image_type,
        header.pixel_bits,
        palette_size,
        footer.has_signature()
    );

    Ok(Tga {
        loaded: true,
        header,
        footer,
        image_id,
        pixels,
        palette,
        order: ChannelOrder::Bgr,
    })
}

fn alloc_zeroed(len: usize) -> Result<Vec<u8>, TgaError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| TgaError::Allocation(format!("{len} bytes")))?;
    buf.resize(len, 0);
    Ok(buf)
}
