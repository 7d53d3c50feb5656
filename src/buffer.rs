//! Byte source/sink abstraction the engines are written against.
//!
//! Both engines see storage only through [`ByteSource`] and [`ByteSink`].
//! The trait's default methods are the byte-wise fallback path; contiguous
//! adaptors override them with `copy_from_slice` fast paths, so the split is
//! decided statically at monomorphization, not by a runtime branch.

use alloc::vec::Vec;

use crate::error::QoiError;

/// Pull-side storage adaptor: raw pixel bytes for the encoder, the encoded
/// stream for the decoder.
pub trait ByteSource {
    /// Total bytes this source can ever yield.
    fn total_len(&self) -> usize;

    /// Bytes pulled so far.
    fn consumed(&self) -> usize;

    /// Pull the next byte.
    fn pull(&mut self) -> Result<u8, QoiError>;

    /// Pull exactly `dst.len()` bytes into caller memory.
    ///
    /// Byte-wise fallback; contiguous adaptors override this.
    fn pull_exact(&mut self, dst: &mut [u8]) -> Result<(), QoiError> {
        for byte in dst {
            *byte = self.pull()?;
        }
        Ok(())
    }

    /// Pull a fixed-size array. Convenience over [`pull_exact`](Self::pull_exact).
    #[inline]
    fn pull_array<const N: usize>(&mut self) -> Result<[u8; N], QoiError> {
        let mut buf = [0u8; N];
        self.pull_exact(&mut buf)?;
        Ok(buf)
    }

    /// Bytes not yet pulled.
    #[inline]
    fn remaining(&self) -> usize {
        self.total_len() - self.consumed()
    }
}

/// Push-side storage adaptor for engine output.
pub trait ByteSink {
    /// What [`finalize`](Self::finalize) hands back to the caller.
    type Output;

    /// Pre-size the sink for a conservative upper bound. Failure here is an
    /// allocation error, reported before any byte is written.
    fn reserve(&mut self, capacity: usize) -> Result<(), QoiError>;

    /// Push one byte.
    fn push(&mut self, byte: u8) -> Result<(), QoiError>;

    /// Push a slice. Byte-wise fallback; contiguous adaptors override this.
    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), QoiError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Bytes pushed so far.
    fn written(&self) -> usize;

    /// Trim any over-reserved capacity down to the bytes actually written
    /// and yield the externally visible result.
    fn finalize(self) -> Self::Output;
}

/// Contiguous read-only view over borrowed bytes.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> SliceSource<'a> {
        SliceSource { data, pos: 0 }
    }

    /// View over a raw pointer and length.
    ///
    /// Refuses a null pointer with nonzero length before any work begins.
    ///
    /// # Safety
    /// A non-null `ptr` must point to `len` readable bytes that outlive `'a`
    /// and are not mutated while the source exists.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Result<SliceSource<'a>, QoiError> {
        if ptr.is_null() {
            if len != 0 {
                return Err(QoiError::NullPointer);
            }
            return Ok(SliceSource::new(&[]));
        }
        Ok(SliceSource::new(unsafe {
            core::slice::from_raw_parts(ptr, len)
        }))
    }
}

impl ByteSource for SliceSource<'_> {
    #[inline]
    fn total_len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn consumed(&self) -> usize {
        self.pos
    }

    #[inline]
    fn pull(&mut self) -> Result<u8, QoiError> {
        let byte = *self.data.get(self.pos).ok_or(QoiError::UnexpectedEof)?;
        self.pos += 1;
        Ok(byte)
    }

    // contiguous fast path
    #[inline]
    fn pull_exact(&mut self, dst: &mut [u8]) -> Result<(), QoiError> {
        let end = self.pos.checked_add(dst.len()).ok_or(QoiError::UnexpectedEof)?;
        let src = self.data.get(self.pos..end).ok_or(QoiError::UnexpectedEof)?;
        dst.copy_from_slice(src);
        self.pos = end;
        Ok(())
    }
}

/// Owned growable sink backed by a `Vec<u8>`.
#[derive(Debug, Default)]
pub struct VecSink {
    data: Vec<u8>,
}

impl VecSink {
    pub fn new() -> VecSink {
        VecSink { data: Vec::new() }
    }
}

impl ByteSink for VecSink {
    type Output = Vec<u8>;

    fn reserve(&mut self, capacity: usize) -> Result<(), QoiError> {
        self.data
            .try_reserve_exact(capacity.saturating_sub(self.data.len()))
            .map_err(|_| QoiError::AllocationFailed(capacity))
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), QoiError> {
        self.data.push(byte);
        Ok(())
    }

    // contiguous fast path
    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), QoiError> {
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    fn written(&self) -> usize {
        self.data.len()
    }

    fn finalize(mut self) -> Vec<u8> {
        self.data.shrink_to_fit();
        self.data
    }
}

/// Sink over caller-provided mutable memory. Finalizes to the number of
/// bytes written; the caller keeps ownership of the storage.
#[derive(Debug)]
pub struct SliceSink<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(data: &'a mut [u8]) -> SliceSink<'a> {
        SliceSink { data, pos: 0 }
    }

    /// Sink over a raw pointer and length.
    ///
    /// Refuses a null pointer with nonzero length before any work begins.
    ///
    /// # Safety
    /// A non-null `ptr` must point to `len` writable bytes that outlive `'a`
    /// and are not aliased while the sink exists.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: usize) -> Result<SliceSink<'a>, QoiError> {
        if ptr.is_null() {
            if len != 0 {
                return Err(QoiError::NullPointer);
            }
            return Ok(SliceSink::new(&mut []));
        }
        Ok(SliceSink::new(unsafe {
            core::slice::from_raw_parts_mut(ptr, len)
        }))
    }
}

impl ByteSink for SliceSink<'_> {
    type Output = usize;

    fn reserve(&mut self, capacity: usize) -> Result<(), QoiError> {
        // fixed storage: just verify the bound fits
        if capacity > self.data.len() {
            return Err(QoiError::BufferTooSmall {
                needed: capacity,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), QoiError> {
        let actual = self.data.len();
        let slot = self
            .data
            .get_mut(self.pos)
            .ok_or(QoiError::BufferTooSmall {
                needed: self.pos + 1,
                actual,
            })?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    // contiguous fast path
    #[inline]
    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), QoiError> {
        let end = self
            .pos
            .checked_add(bytes.len())
            .ok_or(QoiError::UnexpectedEof)?;
        let actual = self.data.len();
        let dst = self
            .data
            .get_mut(self.pos..end)
            .ok_or(QoiError::BufferTooSmall { needed: end, actual })?;
        dst.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    #[inline]
    fn written(&self) -> usize {
        self.pos
    }

    fn finalize(self) -> usize {
        self.pos
    }
}
