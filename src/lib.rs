//! # zenqoi
//!
//! QOI ("Quite OK Image") lossless image codec: a bidirectional transform
//! between raw interleaved 3/4-channel pixel buffers and the tagged-chunk
//! QOI byte stream.
//!
//! ## Pluggable Storage
//!
//! Both engines are written against the [`ByteSource`]/[`ByteSink`] traits,
//! never a concrete buffer type. The slice-based [`encode`]/[`decode`]
//! entry points cover the common case; [`encode_into`]/[`decode_into`] run
//! the same engine over any adaptor, including raw pointer+length views,
//! without copying through an intermediate buffer.
//!
//! ## Non-Goals
//!
//! - Lossy compression or color-space conversion
//! - Animated/multi-frame streams
//! - Streaming decode of unknown-length input (total length is required
//!   up front)
//! - PNG loading/saving and file I/O (bring your own bytes)
//!
//! ## Usage
//!
//! ```
//! use zenqoi::{Channels, Colorspace, QoiDescriptor};
//! use enough::Unstoppable;
//!
//! let pixels = [255u8, 0, 0, 0, 255, 0]; // 2x1 RGB
//! let desc = QoiDescriptor::new(2, 1, Channels::Rgb, Colorspace::Srgb);
//!
//! let encoded = zenqoi::encode(&pixels, &desc, &Unstoppable)?;
//! let decoded = zenqoi::decode(&encoded, &Unstoppable)?;
//! assert_eq!(decoded.pixels(), &pixels);
//! assert_eq!(decoded.descriptor(), &desc);
//! # Ok::<(), zenqoi::QoiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod buffer;
mod chunk;
mod decode;
mod descriptor;
mod encode;
mod error;
mod header;
mod limits;
mod pixel;

// Re-exports
pub use buffer::{ByteSink, ByteSource, SliceSink, SliceSource, VecSink};
#[cfg(feature = "rgb")]
pub use decode::DecodePixel;
pub use decode::{
    decode, decode_channels, decode_header, decode_into, decode_with_limits, DecodeOutput,
};
pub use descriptor::{Channels, Colorspace, DecodeChannels, QoiDescriptor, PIXELS_MAX};
pub use encode::{encode, encode_into};
pub use enough::{Stop, Unstoppable};
pub use error::QoiError;
pub use header::{HEADER_SIZE, MAGIC, TRAILER};
pub use limits::Limits;
