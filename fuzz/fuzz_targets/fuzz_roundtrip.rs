#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = decoded.encode_tga().expect("decoded image must encode");
    let Ok(decoded2) = Tga::from_bytes(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.palette(), decoded2.palette(), "roundtrip palette mismatch");
    assert_eq!(decoded.image_id(), decoded2.image_id());
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded2.encode_tga().unwrap(), reencoded);
});
