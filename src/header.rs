//! Fixed 14-byte header and the end-of-stream trailer.

use crate::buffer::{ByteSink, ByteSource};
use crate::descriptor::{Channels, Colorspace, QoiDescriptor};
use crate::error::QoiError;

/// ASCII `"qoif"`.
pub const MAGIC: [u8; 4] = *b"qoif";

/// Magic + big-endian width + big-endian height + channels + colorspace.
pub const HEADER_SIZE: usize = 14;

/// Marks the end of the chunk stream.
pub const TRAILER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

/// Emit the 14-byte header for `desc`. The descriptor must already be
/// validated.
pub(crate) fn write_header<W: ByteSink>(sink: &mut W, desc: &QoiDescriptor) -> Result<(), QoiError> {
    sink.push_slice(&MAGIC)?;
    sink.push_slice(&desc.width.to_be_bytes())?;
    sink.push_slice(&desc.height.to_be_bytes())?;
    sink.push(desc.channels as u8)?;
    sink.push(desc.colorspace as u8)?;
    Ok(())
}

/// Read and validate a header, consuming exactly [`HEADER_SIZE`] bytes.
///
/// Any violation (wrong magic, zero dimension, channel count outside {3, 4},
/// unknown colorspace, the pixel-count overflow guard) is fatal to the
/// enclosing decode; no partial descriptor is returned.
pub(crate) fn read_header<S: ByteSource>(source: &mut S) -> Result<QoiDescriptor, QoiError> {
    let magic = source.pull_array::<4>()?;
    if magic != MAGIC {
        return Err(QoiError::UnrecognizedFormat);
    }
    let width = u32::from_be_bytes(source.pull_array()?);
    let height = u32::from_be_bytes(source.pull_array()?);
    let channels = Channels::from_u8(source.pull()?)?;
    let colorspace = Colorspace::from_u8(source.pull()?)?;

    let desc = QoiDescriptor::new(width, height, channels, colorspace);
    desc.validate()?;
    Ok(desc)
}
