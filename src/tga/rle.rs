//! TGA run-length packet decoder.
//!
//! Each packet starts with a control byte. The low 7 bits hold `count - 1`.
//! High bit clear: `count` literal pixels follow. High bit set: one pixel
//! follows and is repeated `count` times.

use alloc::format;

use enough::Stop;

use crate::error::TgaError;

const RUN_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7f;

/// Decode packets from `src` until `dst` is full.
///
/// Returns the number of source bytes consumed. A packet that would write
/// past the end of `dst` is truncated (its source bytes are still
/// consumed); reading past the end of `src` is an error.
pub(crate) fn decode(
    dst: &mut [u8],
    src: &[u8],
    bytes_per_pixel: usize,
    stop: &dyn Stop,
) -> Result<usize, TgaError> {
    let mut offset = 0usize;
    let mut count = 0usize;
    let mut packets = 0usize;

    while count < dst.len() {
        if packets % 4096 == 0 {
            stop.check()?;
        }
        packets += 1;

        let control = *src.get(offset).ok_or_else(|| overrun(offset, src.len()))?;
        offset += 1;
        let repeat = usize::from(control & COUNT_MASK) + 1;
        let room = (dst.len() - count) / bytes_per_pixel;
        let take = repeat.min(room);
        if take < repeat {
            log::warn!(
                "tga: RLE packet of {repeat} pixels overruns image end, keeping {take}"
            );
        }

        if control & RUN_FLAG == 0 {
            let len = repeat * bytes_per_pixel;
            let literal = src
                .get(offset..offset + len)
                .ok_or_else(|| overrun(offset + len, src.len()))?;
            let keep = take * bytes_per_pixel;
            dst[count..count + keep].copy_from_slice(&literal[..keep]);
            count += keep;
            offset += len;
        } else {
            let pixel = src
                .get(offset..offset + bytes_per_pixel)
                .ok_or_else(|| overrun(offset + bytes_per_pixel, src.len()))?;
            for out in dst[count..count + take * bytes_per_pixel].chunks_exact_mut(bytes_per_pixel)
            {
                out.copy_from_slice(pixel);
            }
            count += take * bytes_per_pixel;
            offset += bytes_per_pixel;
        }
    }

    Ok(offset)
}

fn overrun(needed: usize, available: usize) -> TgaError {
    log::debug!("tga: RLE stream needs {needed} bytes, only {available} present");
    TgaError::UnsupportedImage(format!(
        "RLE data needs {needed} bytes, only {available} present"
    ))
}
