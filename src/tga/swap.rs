//! BGR(A) <-> RGB(A) channel swapping.
//!
//! Every operation here is an involution: applying it twice restores the
//! original bytes.

use crate::pixel::PixelDepth;

const ALPHA_5551: u16 = 0x8000;
const HIGH_5551: u16 = 0x7c00;
const GREEN_5551: u16 = 0x03e0;
const LOW_5551: u16 = 0x001f;

/// Swap bytes 0 and 2 of every palette entry. Alpha (byte 3) is untouched.
pub(crate) fn swap_palette(palette: &mut [u8], entry_bytes: usize) {
    swap_br(palette, entry_bytes);
}

/// Swap red and blue in a pixel buffer. Indexed (8-bit) data is left alone
/// since its colour lives in the palette.
pub(crate) fn swap_pixels(pixels: &mut [u8], depth: PixelDepth) {
    match depth {
        PixelDepth::Bits8 => {}
        PixelDepth::Bits16 => {
            let (words, _) = pixels.as_chunks_mut::<2>();
            for w in words {
                *w = swap_5551(u16::from_le_bytes(*w)).to_le_bytes();
            }
        }
        PixelDepth::Bits24 => swap_br(pixels, 3),
        PixelDepth::Bits32 => swap_br(pixels, 4),
    }
}

/// Exchange the two 5-bit colour fields of an A1-5-5-5 word.
fn swap_5551(v: u16) -> u16 {
    (v & ALPHA_5551) | ((v & HIGH_5551) >> 10) | (v & GREEN_5551) | ((v & LOW_5551) << 10)
}

#[cfg(feature = "simd")]
fn swap_br(buf: &mut [u8], stride: usize) {
    if buf.is_empty() {
        return;
    }
    let done = match stride {
        3 => garb::bytes::rgb_to_bgr_inplace(buf).is_ok(),
        4 => garb::bytes::rgba_to_bgra_inplace(buf).is_ok(),
        _ => false,
    };
    if !done {
        swap_br_scalar(buf, stride);
    }
}

#[cfg(not(feature = "simd"))]
fn swap_br(buf: &mut [u8], stride: usize) {
    swap_br_scalar(buf, stride);
}

fn swap_br_scalar(buf: &mut [u8], stride: usize) {
    for px in buf.chunks_exact_mut(stride) {
        px.swap(0, 2);
    }
}
