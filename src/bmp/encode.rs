//! BMP encoder: BITMAPFILEHEADER + BITMAPINFOHEADER + optional colour table
//! + pixel rows exactly as stored.
//!
//! Rows are written without padding, so the file is only conformant when
//! `width * bytes_per_pixel` is a multiple of 4.

use alloc::vec::Vec;

use crate::error::TgaError;
use crate::tga::TgaHeader;

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;

/// Encode a bottom-up pixel buffer and its palette to BMP.
///
/// 24-bit palette entries are widened to 4-byte BGRX quads; 32-bit entries
/// are copied unchanged.
pub(crate) fn encode_bmp(
    header: &TgaHeader,
    palette: Option<&[u8]>,
    pixels: &[u8],
) -> Result<Vec<u8>, TgaError> {
    let colors = table_colors(header, palette);
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE + colors * 4;
    let file_size = file_size(header, palette, pixels.len())?;

    let mut out = Vec::with_capacity(file_size);
    write_bmp_header(
        &mut out,
        file_size,
        data_offset,
        pixels.len(),
        u32::from(header.width),
        u32::from(header.height),
        u16::from(header.pixel_bits),
        colors,
    );

    if let Some(palette) = palette {
        if header.palette_bits == 24 {
            for entry in palette.chunks_exact(3) {
                out.extend_from_slice(entry);
                out.push(0);
            }
        } else {
            out.extend_from_slice(palette);
        }
    }

    out.extend_from_slice(pixels);
    Ok(out)
}

/// Total BMP file size, or `DimensionsTooLarge` if it does not fit the
/// 32-bit size field.
pub(crate) fn file_size(
    header: &TgaHeader,
    palette: Option<&[u8]>,
    pixel_bytes: usize,
) -> Result<usize, TgaError> {
    let colors = table_colors(header, palette);
    (FILE_HEADER_SIZE + INFO_HEADER_SIZE + colors * 4)
        .checked_add(pixel_bytes)
        .filter(|&s| u32::try_from(s).is_ok())
        .ok_or(TgaError::DimensionsTooLarge {
            width: u32::from(header.width),
            height: u32::from(header.height),
        })
}

fn table_colors(header: &TgaHeader, palette: Option<&[u8]>) -> usize {
    if palette.is_some() {
        usize::from(header.palette_len)
    } else {
        0
    }
}

#[allow(clippy::too_many_arguments)]
fn write_bmp_header(
    out: &mut Vec<u8>,
    file_size: usize,
    data_offset: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
    bpp: u16,
    colors: usize,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // h resolution (72 DPI)
    out.extend_from_slice(&2835u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&(colors as u32).to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
