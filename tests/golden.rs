//! Byte-exact vectors from the reference implementation's test suite.

use enough::Unstoppable;
use zenqoi::*;

const IMAGE_RGB: [u8; 96] = [
    130, 0, 212, 124, 204, 88, 79, 26, 210, 104, 117, 4, 137, 191, 80, 204, //
    65, 175, 38, 160, 207, 182, 174, 59, 83, 18, 227, 4, 234, 150, 97, 131, //
    62, 95, 167, 236, 132, 143, 78, 175, 86, 172, 237, 113, 195, 87, 227, 242, //
    13, 189, 125, 33, 16, 79, 165, 247, 216, 193, 192, 113, 254, 176, 172, 227, //
    94, 105, 146, 232, 150, 39, 148, 238, 105, 65, 23, 4, 33, 252, 243, 111, //
    120, 32, 150, 144, 96, 66, 9, 102, 226, 245, 145, 153, 240, 183, 60, 132,
];

const STREAM_RGB: [u8; 150] = [
    113, 111, 105, 102, 0, 0, 0, 8, 0, 0, 0, 4, 3, 0, 254, 130, //
    0, 212, 254, 124, 204, 88, 254, 79, 26, 210, 254, 104, 117, 4, 254, 137, //
    191, 80, 254, 204, 65, 175, 254, 38, 160, 207, 254, 182, 174, 59, 254, 83, //
    18, 227, 254, 4, 234, 150, 254, 97, 131, 62, 254, 95, 167, 236, 254, 132, //
    143, 78, 254, 175, 86, 172, 254, 237, 113, 195, 254, 87, 227, 242, 254, 13, //
    189, 125, 254, 33, 16, 79, 254, 165, 247, 216, 254, 193, 192, 113, 254, 254, //
    176, 172, 254, 227, 94, 105, 254, 146, 232, 150, 254, 39, 148, 238, 254, 105, //
    65, 23, 254, 4, 33, 252, 254, 243, 111, 120, 254, 32, 150, 144, 254, 96, //
    66, 9, 254, 102, 226, 245, 254, 145, 153, 240, 254, 183, 60, 132, 0, 0, //
    0, 0, 0, 0, 0, 1,
];

const IMAGE_RGBA: [u8; 128] = [
    227, 18, 59, 13, 114, 145, 116, 65, 253, 13, 51, 2, 59, 127, 119, 230, //
    130, 55, 122, 13, 136, 141, 55, 200, 251, 177, 49, 112, 173, 183, 103, 36, //
    222, 40, 87, 30, 158, 80, 63, 71, 237, 95, 111, 66, 197, 97, 199, 150, //
    4, 219, 66, 124, 130, 119, 209, 109, 62, 184, 17, 197, 1, 158, 17, 144, //
    213, 121, 105, 79, 135, 23, 237, 52, 36, 240, 218, 108, 203, 171, 129, 236, //
    9, 124, 40, 10, 251, 87, 171, 127, 118, 254, 215, 136, 202, 241, 141, 111, //
    252, 185, 28, 179, 57, 236, 121, 96, 11, 150, 167, 113, 154, 81, 167, 125, //
    245, 28, 216, 181, 107, 14, 134, 46, 39, 19, 62, 59, 22, 253, 148, 38,
];

const STREAM_RGBA: [u8; 182] = [
    113, 111, 105, 102, 0, 0, 0, 8, 0, 0, 0, 4, 4, 0, 255, 227, //
    18, 59, 13, 255, 114, 145, 116, 65, 255, 253, 13, 51, 2, 255, 59, 127, //
    119, 230, 255, 130, 55, 122, 13, 255, 136, 141, 55, 200, 255, 251, 177, 49, //
    112, 255, 173, 183, 103, 36, 255, 222, 40, 87, 30, 255, 158, 80, 63, 71, //
    255, 237, 95, 111, 66, 255, 197, 97, 199, 150, 255, 4, 219, 66, 124, 255, //
    130, 119, 209, 109, 255, 62, 184, 17, 197, 255, 1, 158, 17, 144, 255, 213, //
    121, 105, 79, 255, 135, 23, 237, 52, 255, 36, 240, 218, 108, 255, 203, 171, //
    129, 236, 255, 9, 124, 40, 10, 255, 251, 87, 171, 127, 255, 118, 254, 215, //
    136, 255, 202, 241, 141, 111, 255, 252, 185, 28, 179, 255, 57, 236, 121, 96, //
    255, 11, 150, 167, 113, 255, 154, 81, 167, 125, 255, 245, 28, 216, 181, 255, //
    107, 14, 134, 46, 255, 39, 19, 62, 59, 255, 22, 253, 148, 38, 0, 0, //
    0, 0, 0, 0, 0, 1,
];

fn rgb_desc() -> QoiDescriptor {
    QoiDescriptor::new(8, 4, Channels::Rgb, Colorspace::Srgb)
}

fn rgba_desc() -> QoiDescriptor {
    QoiDescriptor::new(8, 4, Channels::Rgba, Colorspace::Srgb)
}

#[test]
fn encode_rgb_golden() {
    let encoded = encode(&IMAGE_RGB, &rgb_desc(), &Unstoppable).unwrap();
    assert_eq!(&encoded[..], &STREAM_RGB[..]);
}

#[test]
fn decode_rgb_golden() {
    let decoded = decode(&STREAM_RGB, &Unstoppable).unwrap();
    assert_eq!(decoded.descriptor(), &rgb_desc());
    assert_eq!(decoded.pixels(), &IMAGE_RGB[..]);
}

#[test]
fn encode_rgba_golden() {
    let encoded = encode(&IMAGE_RGBA, &rgba_desc(), &Unstoppable).unwrap();
    assert_eq!(&encoded[..], &STREAM_RGBA[..]);
}

#[test]
fn decode_rgba_golden() {
    let decoded = decode(&STREAM_RGBA, &Unstoppable).unwrap();
    assert_eq!(decoded.descriptor(), &rgba_desc());
    assert_eq!(decoded.pixels(), &IMAGE_RGBA[..]);
}

#[test]
fn golden_streams_via_slice_sink() {
    // same bytes through the caller-provided-storage adaptor
    let desc = rgb_desc();
    let mut storage = vec![0u8; desc.max_encoded_len()];
    let written = encode_into(
        SliceSource::new(&IMAGE_RGB),
        SliceSink::new(&mut storage),
        &desc,
        &Unstoppable,
    )
    .unwrap();
    assert_eq!(&storage[..written], &STREAM_RGB[..]);
}

#[test]
fn golden_decode_forced_channels() {
    // forcing RGBA out of the RGB golden pads every pixel with opaque alpha
    let decoded = decode_channels(&STREAM_RGB, DecodeChannels::Rgba, &Unstoppable).unwrap();
    assert_eq!(decoded.pixels().len(), 8 * 4 * 4);
    for (px, raw) in decoded.pixels().chunks_exact(4).zip(IMAGE_RGB.chunks_exact(3)) {
        assert_eq!(&px[..3], raw);
        assert_eq!(px[3], 255);
    }
}
