//! Reordering pixel buffers between the four scan-line orientations.

use alloc::vec::Vec;

use super::header::ScanlineOrder;
use crate::pixel::PixelDepth;

/// Reorder `pixels` from orientation `from` to `to`.
///
/// Returns `None` when the orientations already match. Otherwise every
/// destination pixel `(x, y)` is read from the source with `x` mirrored when
/// the horizontal directions differ and `y` mirrored when the vertical
/// directions differ.
pub(crate) fn reorder(
    pixels: &[u8],
    width: usize,
    height: usize,
    depth: PixelDepth,
    from: ScanlineOrder,
    to: ScanlineOrder,
) -> Option<Vec<u8>> {
    if from == to {
        return None;
    }
    let flip_x = from.is_right_to_left() != to.is_right_to_left();
    let flip_y = from.is_top_down() != to.is_top_down();

    Some(match depth {
        PixelDepth::Bits8 => reorder_px::<1>(pixels, width, height, flip_x, flip_y),
        PixelDepth::Bits16 => reorder_px::<2>(pixels, width, height, flip_x, flip_y),
        PixelDepth::Bits24 => reorder_px::<3>(pixels, width, height, flip_x, flip_y),
        PixelDepth::Bits32 => reorder_px::<4>(pixels, width, height, flip_x, flip_y),
    })
}

fn reorder_px<const N: usize>(
    src: &[u8],
    width: usize,
    height: usize,
    flip_x: bool,
    flip_y: bool,
) -> Vec<u8> {
    let row_bytes = width * N;
    let mut out = Vec::with_capacity(row_bytes * height);
    for y in 0..height {
        let ty = if flip_y { height - 1 - y } else { y };
        let row = &src[ty * row_bytes..(ty + 1) * row_bytes];
        if flip_x {
            let (px, _) = row.as_chunks::<N>();
            for p in px.iter().rev() {
                out.extend_from_slice(p);
            }
        } else {
            out.extend_from_slice(row);
        }
    }
    out
}
