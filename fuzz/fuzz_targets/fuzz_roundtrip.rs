#![no_main]
use libfuzzer_sys::fuzz_target;
use zenqoi::*;

fuzz_target!(|data: &[u8]| {
    // If it decodes, re-encoding the pixels must reproduce them exactly
    let Ok(decoded) = decode(data, &enough::Unstoppable) else {
        return;
    };

    let desc = QoiDescriptor::new(
        decoded.width(),
        decoded.height(),
        decoded.channels(),
        decoded.descriptor().colorspace,
    );
    let reencoded =
        encode(decoded.pixels(), &desc, &enough::Unstoppable).expect("decoded image must encode");
    let decoded2 = decode(&reencoded, &enough::Unstoppable).expect("re-encoded data must decode");

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded2.descriptor(), &desc);
});
