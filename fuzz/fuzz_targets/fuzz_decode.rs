#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Probe and full decode must never panic
    let _ = zentga::TgaInfo::from_bytes(data);

    let limits = zentga::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };
    let Ok(mut tga) = zentga::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // Every transform on a decoded image must succeed
    tga.swap_channels().unwrap();
    tga.set_orientation(zentga::ScanlineOrder::RightLeftUpDown).unwrap();
    let _ = tga.encode_bmp();
});
