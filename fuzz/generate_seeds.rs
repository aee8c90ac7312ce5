#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, palette: Option<(u16, u8)>, w: u16, h: u16, bits: u8, desc: u8) -> Vec<u8> {
    let mut out = vec![0u8; 18];
    out[2] = image_type;
    if let Some((len, entry_bits)) = palette {
        out[1] = 1;
        out[5..7].copy_from_slice(&len.to_le_bytes());
        out[7] = entry_bits;
    }
    out[12..14].copy_from_slice(&w.to_le_bytes());
    out[14..16].copy_from_slice(&h.to_le_bytes());
    out[16] = bits;
    out[17] = desc;
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Truecolour 2x2, 24-bit, bottom-up
    let mut bgr = header(2, None, 2, 2, 24, 0x00);
    bgr.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0, 128, 128, 128]);
    fs::write(format!("{dir}/bgr_2x2.tga"), &bgr).unwrap();

    // Truecolour 1x1, 32-bit, top-down, with footer
    let mut bgra = header(2, None, 1, 1, 32, 0x28);
    bgra.extend_from_slice(&[1, 2, 3, 255]);
    bgra.extend_from_slice(&[0u8; 8]);
    bgra.extend_from_slice(b"TRUEVISION-XFILE.\0");
    fs::write(format!("{dir}/bgra_footer_1x1.tga"), &bgra).unwrap();

    // Indexed 4x1 with a 2-entry 24-bit palette and a 3-byte ID
    let mut indexed = header(1, Some((2, 24)), 4, 1, 8, 0x20);
    indexed[0] = 3;
    indexed.extend_from_slice(b"zen");
    indexed.extend_from_slice(&[0, 0, 0, 255, 255, 255]);
    indexed.extend_from_slice(&[0, 1, 1, 0]);
    fs::write(format!("{dir}/indexed_4x1.tga"), &indexed).unwrap();

    // RLE grayscale 8x1: run of 5 then 3 literals
    let mut rle_gray = header(11, None, 8, 1, 8, 0x00);
    rle_gray.extend_from_slice(&[0x84, 7, 0x02, 1, 2, 3]);
    fs::write(format!("{dir}/rle_gray_8x1.tga"), &rle_gray).unwrap();

    // RLE 16-bit 3x1
    let mut rle_16 = header(10, None, 3, 1, 16, 0x01);
    rle_16.extend_from_slice(&[0x82, 0x1f, 0x80]);
    fs::write(format!("{dir}/rle_5551_3x1.tga"), &rle_16).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &bgr[..10]).unwrap();
    fs::write(format!("{dir}/truncated_pixels.bin"), &bgr[..20]).unwrap();
    fs::write(format!("{dir}/truncated_palette.bin"), &indexed[..24]).unwrap();
    let mut overrun = header(11, None, 2, 1, 8, 0x00);
    overrun.extend_from_slice(&[0x7f, 1]);
    fs::write(format!("{dir}/rle_overrun.bin"), &overrun).unwrap();

    println!("Generated seed corpus in {dir}/");
}
