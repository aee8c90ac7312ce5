//! Colour-map (palette) extraction.

use alloc::format;
use alloc::vec::Vec;

use super::header::{HEADER_SIZE, TgaHeader};
use crate::error::TgaError;

/// Read the palette block of an indexed image.
///
/// Returns `Ok(None)` for non-indexed image types. Entries are copied
/// verbatim (BGR or BGRA) from just after the header and ID field.
pub(crate) fn read(data: &[u8], header: &TgaHeader) -> Result<Option<Vec<u8>>, TgaError> {
    if !header.kind().is_some_and(|t| t.is_indexed()) {
        return Ok(None);
    }
    if !header.has_palette {
        return Err(TgaError::UnsupportedPalette(
            "indexed image without a palette".into(),
        ));
    }

    let entry = match header.palette_bits {
        24 => 3,
        32 => 4,
        bits => {
            log::debug!("tga: unsupported palette entry size {bits}");
            return Err(TgaError::UnsupportedPalette(format!(
                "{bits} bits per entry"
            )));
        }
    };

    let start = HEADER_SIZE + usize::from(header.id_length);
    let len = usize::from(header.palette_len) * entry;
    let block = data.get(start..start + len).ok_or_else(|| {
        TgaError::UnsupportedPalette(format!(
            "palette needs {len} bytes at offset {start}, input is {} bytes",
            data.len()
        ))
    })?;
    Ok(Some(block.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn indexed_header(len: u16, bits: u8, id_length: u8) -> TgaHeader {
        TgaHeader {
            id_length,
            has_palette: true,
            image_type: 1,
            palette_len: len,
            palette_bits: bits,
            width: 1,
            height: 1,
            pixel_bits: 8,
            ..Default::default()
        }
    }

    #[test]
    fn reads_after_id_field() {
        let h = indexed_header(2, 24, 3);
        let mut data = vec![0u8; HEADER_SIZE + 3];
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6, 99]);
        assert_eq!(read(&data, &h).unwrap(), Some(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn full_256_entry_palette() {
        let h = indexed_header(256, 24, 0);
        let mut data = vec![0u8; HEADER_SIZE];
        data.extend((0..768).map(|i| i as u8));
        let pal = read(&data, &h).unwrap().unwrap();
        assert_eq!(pal.len(), 768);
        assert_eq!(&pal[..], &data[HEADER_SIZE..]);
    }

    #[test]
    fn non_indexed_is_skipped() {
        let mut h = indexed_header(4, 32, 0);
        h.image_type = 2;
        assert_eq!(read(&[], &h).unwrap(), None);
    }

    #[test]
    fn missing_palette_flag() {
        let mut h = indexed_header(4, 32, 0);
        h.has_palette = false;
        assert!(matches!(
            read(&[0u8; 64], &h),
            Err(TgaError::UnsupportedPalette(_))
        ));
    }

    #[test]
    fn bad_entry_size() {
        let h = indexed_header(4, 16, 0);
        assert!(matches!(
            read(&[0u8; 64], &h),
            Err(TgaError::UnsupportedPalette(_))
        ));
    }

    #[test]
    fn truncated_palette() {
        let h = indexed_header(4, 32, 0);
        assert!(read(&[0u8; HEADER_SIZE + 15], &h).is_err());
    }
}
