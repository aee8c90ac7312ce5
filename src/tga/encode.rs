//! TGA writer: always uncompressed, always with a footer.

use alloc::vec::Vec;

use super::header::{FOOTER_SIZE, HEADER_SIZE, TgaFooter, TgaHeader};

/// Serialize header, image ID, palette, pixels and footer.
pub(crate) fn encode_tga(
    header: &TgaHeader,
    image_id: &[u8],
    palette: Option<&[u8]>,
    pixels: &[u8],
    footer: &TgaFooter,
) -> Vec<u8> {
    let palette = palette.unwrap_or(&[]);
    let total = HEADER_SIZE + image_id.len() + palette.len() + pixels.len() + FOOTER_SIZE;

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(image_id);
    out.extend_from_slice(palette);
    out.extend_from_slice(pixels);
    out.extend_from_slice(&footer.to_bytes());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_and_type_downgrade() {
        let header = TgaHeader {
            id_length: 2,
            has_palette: true,
            image_type: 9,
            palette_len: 1,
            palette_bits: 24,
            width: 2,
            height: 1,
            pixel_bits: 8,
            ..Default::default()
        };
        let out = encode_tga(
            &header,
            b"hi",
            Some(&[1, 2, 3]),
            &[0, 0],
            &TgaFooter::default(),
        );
        assert_eq!(out.len(), HEADER_SIZE + 2 + 3 + 2 + FOOTER_SIZE);
        assert_eq!(out[2], 1);
        assert_eq!(&out[HEADER_SIZE..HEADER_SIZE + 2], b"hi");
        assert_eq!(&out[HEADER_SIZE + 2..HEADER_SIZE + 5], &[1, 2, 3]);
        assert_eq!(&out[out.len() - 18..out.len() - 2], b"TRUEVISION-TARGA");
    }
}
