//! QOI decoder engine and decoded-image output.

use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::{ByteSink, ByteSource, SliceSource, VecSink};
use crate::chunk::{MASK_2, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA};
use crate::descriptor::{Channels, DecodeChannels, QoiDescriptor};
use crate::error::QoiError;
use crate::header::{read_header, HEADER_SIZE, TRAILER};
use crate::limits::Limits;
use crate::pixel::{ColorCache, Rgba};

/// Cancellation-check cadence inside the pixel loop.
const STOP_INTERVAL: usize = 16 * 1024;

/// Decoded image: owned pixel bytes plus the parsed descriptor.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    descriptor: QoiDescriptor,
    channels: Channels,
}

impl DecodeOutput {
    /// Access the interleaved pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// The descriptor stored in the stream. Its channel count is the stored
    /// one, which may differ from [`channels`](Self::channels) when a forced
    /// output layout was requested.
    pub fn descriptor(&self) -> &QoiDescriptor {
        &self.descriptor
    }

    /// Channel layout of [`pixels`](Self::pixels).
    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn width(&self) -> u32 {
        self.descriptor.width
    }

    pub fn height(&self) -> u32 {
        self.descriptor.height
    }

    /// Reinterpret pixel data as a typed pixel slice.
    ///
    /// Returns [`QoiError::LayoutMismatch`] if the output layout doesn't
    /// match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: DecodePixel>(&self) -> Result<&[P], QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        use rgb::AsPixels as _;
        if self.channels != P::channels() {
            return Err(QoiError::LayoutMismatch {
                expected: P::channels(),
                actual: self.channels,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width() as usize,
            self.height() as usize,
        ))
    }

    /// Convert to an [`imgref::ImgVec`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: DecodePixel>(&self) -> Result<imgref::ImgVec<P>, QoiError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgVec::new(
            pixels.to_vec(),
            self.width() as usize,
            self.height() as usize,
        ))
    }
}

/// Pixel types decoded output can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy {
    fn channels() -> Channels;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn channels() -> Channels {
        Channels::Rgb
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn channels() -> Channels {
        Channels::Rgba
    }
}

/// Parse and validate the header without decoding pixels (cheap probe).
pub fn decode_header(data: &[u8]) -> Result<QoiDescriptor, QoiError> {
    read_header(&mut SliceSource::new(data))
}

/// Decode a QOI stream, emitting the channel count stored in the header.
pub fn decode(data: &[u8], stop: &dyn Stop) -> Result<DecodeOutput, QoiError> {
    decode_channels(data, DecodeChannels::Source, stop)
}

/// Decode a QOI stream to a requested channel layout: alpha is dropped when
/// 3 channels are requested from a 4-channel stream, and synthesized as
/// opaque in the opposite direction.
pub fn decode_channels(
    data: &[u8],
    channels: DecodeChannels,
    stop: &dyn Stop,
) -> Result<DecodeOutput, QoiError> {
    decode_with_limits(data, channels, None, stop)
}

/// [`decode_channels`] with caller-tunable resource [`Limits`].
pub fn decode_with_limits(
    data: &[u8],
    channels: DecodeChannels,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, QoiError> {
    let (pixels, descriptor) = decode_into(
        SliceSource::new(data),
        VecSink::new(),
        channels,
        limits,
        stop,
    )?;
    Ok(DecodeOutput {
        pixels,
        channels: channels.resolve(descriptor.channels),
        descriptor,
    })
}

/// Decode from any [`ByteSource`] into any [`ByteSink`].
///
/// The storage-generic engine behind [`decode`]. The source's total length
/// must be known up front; a source shorter than header plus trailer is
/// rejected before any work.
pub fn decode_into<S, W>(
    mut source: S,
    mut sink: W,
    channels: DecodeChannels,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<(W::Output, QoiDescriptor), QoiError>
where
    S: ByteSource,
    W: ByteSink,
{
    let total = source.total_len();
    if total < HEADER_SIZE + TRAILER.len() {
        return Err(QoiError::UnexpectedEof);
    }

    let desc = read_header(&mut source)?;
    if let Some(limits) = limits {
        limits.check_dimensions(desc.width, desc.height)?;
    }

    let out_channels = channels.resolve(desc.channels);
    let out_len = desc.pixel_count() * out_channels.count();
    if let Some(limits) = limits {
        limits.check_output_len(out_len)?;
    }
    sink.reserve(out_len)?;

    // trailer bytes are never chunk tags
    let chunks_len = total - TRAILER.len();
    match out_channels {
        Channels::Rgb => {
            decode_pixels::<3, S, W>(&mut source, &mut sink, desc.pixel_count(), chunks_len, stop)?
        }
        Channels::Rgba => {
            decode_pixels::<4, S, W>(&mut source, &mut sink, desc.pixel_count(), chunks_len, stop)?
        }
    }

    Ok((sink.finalize(), desc))
}

fn decode_pixels<const N: usize, S, W>(
    source: &mut S,
    sink: &mut W,
    pixel_count: usize,
    chunks_len: usize,
    stop: &dyn Stop,
) -> Result<(), QoiError>
where
    S: ByteSource,
    W: ByteSink,
{
    let mut cache = ColorCache::new();
    let mut px = Rgba::OPAQUE_BLACK;
    let mut run: usize = 0;

    for i in 0..pixel_count {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }

        if run > 0 {
            run -= 1;
        } else if source.consumed() < chunks_len {
            let b1 = source.pull()?;

            if b1 == OP_RGB {
                let [r, g, b] = source.pull_array()?;
                px.r = r;
                px.g = g;
                px.b = b;
                cache.put(px);
            } else if b1 == OP_RGBA {
                let [r, g, b, a] = source.pull_array()?;
                px = Rgba { r, g, b, a };
                cache.put(px);
            } else if b1 & MASK_2 == OP_INDEX {
                // back-reference: the cache is left untouched
                px = cache.get(usize::from(b1 & 0x3f));
            } else if b1 & MASK_2 == OP_DIFF {
                px.r = px.r.wrapping_add((b1 >> 4) & 0x03).wrapping_sub(2);
                px.g = px.g.wrapping_add((b1 >> 2) & 0x03).wrapping_sub(2);
                px.b = px.b.wrapping_add(b1 & 0x03).wrapping_sub(2);
                cache.put(px);
            } else if b1 & MASK_2 == OP_LUMA {
                let b2 = source.pull()?;
                let dg = (b1 & 0x3f).wrapping_sub(32);
                px.r = px
                    .r
                    .wrapping_add(dg.wrapping_sub(8).wrapping_add((b2 >> 4) & 0x0f));
                px.g = px.g.wrapping_add(dg);
                px.b = px.b.wrapping_add(dg.wrapping_sub(8).wrapping_add(b2 & 0x0f));
                cache.put(px);
            } else {
                // remaining pattern is OP_RUN; the count covers this pixel
                // plus the stored number of following ones
                run = usize::from(b1 & 0x3f);
                cache.put(px);
            }
        } else {
            // chunk stream exhausted before the declared pixel count
            return Err(QoiError::UnexpectedEof);
        }

        let bytes = [px.r, px.g, px.b, px.a];
        sink.push_slice(&bytes[..N])?;
    }

    Ok(())
}
