use enough::Unstoppable;
use zentga::*;

fn header(image_type: u8, w: u16, h: u16, bits: u8) -> TgaHeader {
    TgaHeader {
        image_type,
        width: w,
        height: h,
        pixel_bits: bits,
        descriptor: 0x20,
        ..Default::default()
    }
}

fn tga_file(header: &TgaHeader, body: &[u8]) -> Vec<u8> {
    let mut out = header.to_bytes().to_vec();
    out.extend_from_slice(body);
    out
}

#[test]
fn tga_roundtrip_bgr24() {
    let w = 4;
    let h = 3;
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            if (x + y) % 2 == 0 {
                pixels[off] = 255;
                pixels[off + 1] = 0;
                pixels[off + 2] = 128;
            } else {
                pixels[off] = 0;
                pixels[off + 1] = 200;
                pixels[off + 2] = 50;
            }
        }
    }

    let tga = Tga::from_parts(header(2, w as u16, h as u16, 24), pixels.clone(), None).unwrap();
    let encoded = tga.encode_tga().unwrap();
    assert_eq!(encoded.len(), HEADER_SIZE + pixels.len() + FOOTER_SIZE);

    let decoded = Tga::from_bytes(&encoded).unwrap();
    assert_eq!(decoded.width(), w as u16);
    assert_eq!(decoded.height(), h as u16);
    assert_eq!(decoded.layout(), PixelLayout::Bgr8);
    assert_eq!(decoded.pixels(), &pixels[..]);
    assert!(decoded.footer().has_signature());
    assert_eq!(decoded.encode_tga().unwrap(), encoded);
}

#[test]
fn tga_roundtrip_indexed_256() {
    let palette: Vec<u8> = (0..768).map(|i| (i * 7 % 251) as u8).collect();
    let pixels: Vec<u8> = (0..64u32).map(|i| (i * 3) as u8).collect();
    let hdr = TgaHeader {
        has_palette: true,
        palette_len: 256,
        palette_bits: 24,
        ..header(1, 8, 8, 8)
    };
    let mut body = palette.clone();
    body.extend_from_slice(&pixels);

    let tga = Tga::from_bytes(&tga_file(&hdr, &body)).unwrap();
    assert_eq!(tga.palette_size(), 768);
    assert_eq!(tga.palette(), Some(&palette[..]));
    assert_eq!(tga.layout(), PixelLayout::Indexed8);

    let encoded = tga.encode_tga().unwrap();
    assert_eq!(&encoded[HEADER_SIZE..HEADER_SIZE + 768], &palette[..]);
    assert_eq!(&encoded[HEADER_SIZE + 768..HEADER_SIZE + 768 + 64], &pixels[..]);
}

#[test]
fn rle_decodes_to_raw_and_reencodes_uncompressed() {
    let mut raw_header = header(10, 4, 2, 24).to_bytes();
    raw_header[2] = 10;
    let mut file = raw_header.to_vec();
    // Row 0: run of 4 identical pixels. Row 1: 2 literals + run of 2.
    file.extend_from_slice(&[0x83, 1, 2, 3]);
    file.extend_from_slice(&[0x01, 10, 11, 12, 20, 21, 22]);
    file.extend_from_slice(&[0x81, 30, 31, 32]);

    let tga = Tga::from_bytes(&file).unwrap();
    assert_eq!(tga.header().image_type, 10);
    assert_eq!(
        tga.pixels(),
        &[
            1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3, //
            10, 11, 12, 20, 21, 22, 30, 31, 32, 30, 31, 32,
        ]
    );

    let encoded = tga.encode_tga().unwrap();
    assert_eq!(encoded[2], 2);
    let again = Tga::from_bytes(&encoded).unwrap();
    assert_eq!(again.pixels(), tga.pixels());
    assert_eq!(again.encode_tga().unwrap(), encoded);
}

#[test]
fn rle_overrun_is_rejected() {
    let mut raw_header = header(11, 8, 1, 8).to_bytes();
    raw_header[2] = 11;
    let mut file = raw_header.to_vec();
    file.extend_from_slice(&[0x07, 1, 2, 3]);
    let err = Tga::from_bytes(&file).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedImage);
}

#[test]
fn origin_with_one_nonzero_coordinate_is_accepted() {
    let hdr = TgaHeader {
        x_origin: 0,
        y_origin: 5,
        ..header(3, 1, 1, 8)
    };
    let tga = Tga::from_bytes(&tga_file(&hdr, &[7])).unwrap();
    assert_eq!(tga.header().y_origin, 5);

    let both = TgaHeader {
        x_origin: 3,
        y_origin: 5,
        ..header(3, 1, 1, 8)
    };
    let err = Tga::from_bytes(&tga_file(&both, &[7])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedHeader);
}

#[test]
fn image_id_is_preserved() {
    let hdr = TgaHeader {
        id_length: 5,
        ..header(3, 2, 1, 8)
    };
    let tga = Tga::from_bytes(&tga_file(&hdr, b"hello\x01\x02")).unwrap();
    assert_eq!(tga.image_id(), b"hello");
    assert_eq!(tga.pixels(), &[1, 2]);
    let again = Tga::from_bytes(&tga.encode_tga().unwrap()).unwrap();
    assert_eq!(again.image_id(), b"hello");
    assert_eq!(again.pixels(), &[1, 2]);
}

#[test]
fn parts_with_declared_id_length_roundtrip() {
    let hdr = TgaHeader {
        id_length: 4,
        ..header(3, 2, 2, 8)
    };
    let tga = Tga::from_parts(hdr, vec![1, 2, 3, 4], None).unwrap();
    assert_eq!(tga.header().id_length, 0);

    let encoded = tga.encode_tga().unwrap();
    assert_eq!(encoded[0], 0);
    let decoded = Tga::from_bytes(&encoded).unwrap();
    assert!(decoded.image_id().is_empty());
    assert_eq!(decoded.pixels(), &[1, 2, 3, 4]);
    assert_eq!(decoded.encode_tga().unwrap(), encoded);
}

#[test]
fn footer_offsets_survive() {
    let mut tga = Tga::from_parts(header(3, 1, 1, 8), vec![9], None).unwrap();
    tga.set_extension_offset(1234);
    tga.set_developer_offset(42);
    let decoded = Tga::from_bytes(&tga.encode_tga().unwrap()).unwrap();
    assert_eq!(decoded.footer().extension_offset, 1234);
    assert_eq!(decoded.footer().developer_offset, 42);
    assert_eq!(&decoded.footer().signature, &FOOTER_SIGNATURE);
}

#[test]
fn bmp_length_32bit() {
    let pixels: Vec<u8> = (0..8 * 8 * 4).map(|i| i as u8).collect();
    let mut tga = Tga::from_parts(header(2, 8, 8, 32), pixels, None).unwrap();
    let palette_colors = usize::from(tga.palette_len());
    let bmp = tga.encode_bmp().unwrap();
    assert_eq!(bmp.len(), 14 + 40 + 4 * palette_colors + tga.image_size());
    assert_eq!(bmp.len(), 54 + 256);
    assert_eq!(&bmp[0..2], b"BM");
    assert_eq!(tga.orientation(), ScanlineOrder::LeftRightDownUp);
}

#[test]
fn bmp_rows_are_bottom_up() {
    // Top-down source: row 0 is [1, 2, 3, 4], row 1 is [5, 6, 7, 8].
    let mut tga = Tga::from_parts(header(3, 4, 2, 8), (1..=8).collect(), None).unwrap();
    let bmp = tga.encode_bmp().unwrap();
    assert_eq!(&bmp[54..], &[5, 6, 7, 8, 1, 2, 3, 4]);
}

#[test]
fn bmp_indexed_palette_size() {
    let hdr = TgaHeader {
        has_palette: true,
        palette_len: 16,
        palette_bits: 24,
        ..header(1, 4, 4, 8)
    };
    let mut tga = Tga::from_parts(hdr, vec![3; 16], Some(vec![0x40; 48])).unwrap();
    let bmp = tga.encode_bmp().unwrap();
    assert_eq!(bmp.len(), 14 + 40 + 4 * 16 + 16);
    assert_eq!(&bmp[54..58], &[0x40, 0x40, 0x40, 0]);
}

#[test]
fn decode_request_limits() {
    let file = tga_file(&header(2, 4, 4, 32), &[0u8; 64]);
    let limits = Limits {
        max_pixels: Some(15),
        ..Default::default()
    };
    let result = DecodeRequest::new(&file)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        TgaError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let ok = DecodeRequest::new(&file).decode(Unstoppable).unwrap();
    assert_eq!(ok.image_size(), 64);
}

#[test]
fn info_probe() {
    let file = tga_file(&header(2, 3, 2, 32), &[]);
    let info = TgaInfo::from_bytes(&file).unwrap();
    assert_eq!(info.width, 3);
    assert_eq!(info.height, 2);
    assert_eq!(info.image_type, ImageType::FullColor);
    assert_eq!(info.orientation, ScanlineOrder::LeftRightUpDown);
    assert_eq!(info.native_layout, PixelLayout::Bgra8);
}

#[cfg(feature = "std")]
#[test]
fn file_roundtrip() {
    let dir = std::env::temp_dir();
    let tga_path = dir.join(format!("zentga-{}.tga", std::process::id()));
    let bmp_path = dir.join(format!("zentga-{}.bmp", std::process::id()));

    let mut tga = Tga::from_parts(header(2, 2, 2, 32), (0..16).collect(), None).unwrap();
    tga.save(&tga_path).unwrap();
    let loaded = Tga::open(&tga_path).unwrap();
    assert_eq!(loaded.pixels(), tga.pixels());

    tga.save_bmp(&bmp_path).unwrap();
    assert_eq!(std::fs::metadata(&bmp_path).unwrap().len(), 54 + 16);

    let _ = std::fs::remove_file(&tga_path);
    let _ = std::fs::remove_file(&bmp_path);

    let missing = Tga::open(dir.join("zentga-does-not-exist.tga")).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::Open);
}
