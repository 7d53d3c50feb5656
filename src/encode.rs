//! QOI encoder engine.

use alloc::vec::Vec;
use enough::Stop;

use crate::buffer::{ByteSink, ByteSource, SliceSource, VecSink};
use crate::chunk::{MAX_RUN, OP_DIFF, OP_INDEX, OP_LUMA, OP_RGB, OP_RGBA, OP_RUN};
use crate::descriptor::{Channels, QoiDescriptor};
use crate::error::QoiError;
use crate::header::{write_header, TRAILER};
use crate::pixel::{ColorCache, Rgba};

/// Cancellation-check cadence inside the pixel loop.
const STOP_INTERVAL: usize = 16 * 1024;

/// Encode an interleaved pixel buffer to a QOI byte stream.
///
/// `pixels` must hold at least `width * height * channels` bytes; extra
/// bytes are ignored. The output buffer is sized once by a conservative
/// upper bound and trimmed to the bytes actually written.
pub fn encode(pixels: &[u8], desc: &QoiDescriptor, stop: &dyn Stop) -> Result<Vec<u8>, QoiError> {
    encode_into(SliceSource::new(pixels), VecSink::new(), desc, stop)
}

/// Encode from any [`ByteSource`] into any [`ByteSink`].
///
/// This is the storage-generic engine behind [`encode`]: the same code runs
/// over borrowed slices, raw pointer views or caller-provided sinks without
/// copying into an intermediate buffer.
pub fn encode_into<S, W>(
    mut source: S,
    mut sink: W,
    desc: &QoiDescriptor,
    stop: &dyn Stop,
) -> Result<W::Output, QoiError>
where
    S: ByteSource,
    W: ByteSink,
{
    desc.validate()?;
    let needed = desc.pixel_bytes();
    if source.remaining() < needed {
        return Err(QoiError::BufferTooSmall {
            needed,
            actual: source.remaining(),
        });
    }

    sink.reserve(desc.max_encoded_len())?;
    write_header(&mut sink, desc)?;

    match desc.channels {
        Channels::Rgb => encode_pixels::<3, S, W>(&mut source, &mut sink, desc.pixel_count(), stop)?,
        Channels::Rgba => {
            encode_pixels::<4, S, W>(&mut source, &mut sink, desc.pixel_count(), stop)?
        }
    }

    sink.push_slice(&TRAILER)?;
    Ok(sink.finalize())
}

fn encode_pixels<const N: usize, S, W>(
    source: &mut S,
    sink: &mut W,
    pixel_count: usize,
    stop: &dyn Stop,
) -> Result<(), QoiError>
where
    S: ByteSource,
    W: ByteSink,
{
    let mut cache = ColorCache::new();
    let mut prev = Rgba::OPAQUE_BLACK;
    let mut px = prev;
    let mut run: u8 = 0;

    for i in 0..pixel_count {
        if i % STOP_INTERVAL == 0 {
            stop.check()?;
        }

        let bytes = source.pull_array::<N>()?;
        px.r = bytes[0];
        px.g = bytes[1];
        px.b = bytes[2];
        if N == 4 {
            px.a = bytes[N - 1];
        }

        if px == prev {
            run += 1;
            // flush before the 6-bit length field overflows
            if run == MAX_RUN {
                sink.push(OP_RUN | (MAX_RUN - 1))?;
                run = 0;
            }
            continue;
        }

        if run > 0 {
            flush_run(sink, &cache, prev, run)?;
            run = 0;
        }

        if cache.contains(px) {
            sink.push(OP_INDEX | px.cache_index() as u8)?;
        } else {
            cache.put(px);

            if N == 4 && px.a != prev.a {
                // alpha changes always force a full literal
                sink.push_slice(&[OP_RGBA, px.r, px.g, px.b, px.a])?;
            } else {
                // wrap-around deltas; a range check on the biased value
                // covers both the positive and the mod-256 negative side
                let dr = px.r.wrapping_sub(prev.r);
                let dg = px.g.wrapping_sub(prev.g);
                let db = px.b.wrapping_sub(prev.b);

                if dr.wrapping_add(2) < 4 && dg.wrapping_add(2) < 4 && db.wrapping_add(2) < 4 {
                    sink.push(
                        OP_DIFF
                            | dr.wrapping_add(2) << 4
                            | dg.wrapping_add(2) << 2
                            | db.wrapping_add(2),
                    )?;
                } else {
                    let dr_g = dr.wrapping_sub(dg);
                    let db_g = db.wrapping_sub(dg);

                    if dg.wrapping_add(32) < 64
                        && dr_g.wrapping_add(8) < 16
                        && db_g.wrapping_add(8) < 16
                    {
                        sink.push(OP_LUMA | dg.wrapping_add(32))?;
                        sink.push(dr_g.wrapping_add(8) << 4 | db_g.wrapping_add(8))?;
                    } else {
                        sink.push_slice(&[OP_RGB, px.r, px.g, px.b])?;
                    }
                }
            }
        }

        prev = px;
    }

    if run > 0 {
        flush_run(sink, &cache, prev, run)?;
    }
    Ok(())
}

/// Emit a pending run for `prev`.
///
/// A leftover length of exactly 1 is emitted as an INDEX back-reference when
/// the repeated pixel still occupies its cache slot. Both encodings cost one
/// byte; the reference encoder picks INDEX, and matching it keeps output
/// byte-identical.
fn flush_run<W: ByteSink>(
    sink: &mut W,
    cache: &ColorCache,
    prev: Rgba,
    mut run: u8,
) -> Result<(), QoiError> {
    while run >= MAX_RUN {
        sink.push(OP_RUN | (MAX_RUN - 1))?;
        run -= MAX_RUN;
    }
    if run == 0 {
        return Ok(());
    }
    if run == 1 && cache.contains(prev) {
        sink.push(OP_INDEX | prev.cache_index() as u8)?;
    } else {
        sink.push(OP_RUN | (run - 1))?;
    }
    Ok(())
}
