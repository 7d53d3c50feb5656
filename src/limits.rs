//! Caller-tunable guards applied before the decoder allocates its output.

/// Resource limits for decode operations.
///
/// The stream declares its own dimensions, so a hostile 14-byte header can
/// request gigabytes of output. Limits are checked after header parsing and
/// before the output buffer is reserved; `None` fields are unlimited. The
/// format's own [`PIXELS_MAX`](crate::PIXELS_MAX) bound is enforced either
/// way.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded output size in bytes. Depends on the requested
    /// output channel count, not only the stream's.
    pub max_output_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), crate::QoiError> {
        if let Some(max) = self.max_width {
            if u64::from(width) > max {
                return Err(limit_exceeded(alloc::format!(
                    "width {width} over limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if u64::from(height) > max {
                return Err(limit_exceeded(alloc::format!(
                    "height {height} over limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(limit_exceeded(alloc::format!(
                    "{pixels} pixels over limit {max}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_output_len(&self, bytes: usize) -> Result<(), crate::QoiError> {
        if let Some(max) = self.max_output_bytes {
            if bytes as u64 > max {
                return Err(limit_exceeded(alloc::format!(
                    "{bytes} output bytes over limit {max}"
                )));
            }
        }
        Ok(())
    }
}

fn limit_exceeded(what: alloc::string::String) -> crate::QoiError {
    crate::QoiError::LimitExceeded(what)
}
