#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // arbitrary bytes must never panic, only decode or error
    let _ = zenqoi::decode(data, &enough::Unstoppable);
    let _ = zenqoi::decode_channels(data, zenqoi::DecodeChannels::Rgb, &enough::Unstoppable);
    let _ = zenqoi::decode_channels(data, zenqoi::DecodeChannels::Rgba, &enough::Unstoppable);
    let _ = zenqoi::decode_header(data);
});
