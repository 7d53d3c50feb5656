use crate::error::QoiError;

/// Upper bound on `width * height`. Dimensions at or past this are rejected
/// by both encode and decode before any allocation.
pub const PIXELS_MAX: u64 = 400_000_000;

/// Interleaved channel count of a pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channels {
    /// 3 channels, 8-bit RGB. Alpha is implicitly 255.
    Rgb = 3,
    /// 4 channels, 8-bit RGBA.
    Rgba = 4,
}

impl Channels {
    /// Bytes per pixel for this channel count.
    pub const fn count(self) -> usize {
        self as usize
    }

    pub(crate) const fn from_u8(value: u8) -> Result<Channels, QoiError> {
        match value {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            other => Err(QoiError::InvalidChannelCount(other)),
        }
    }
}

/// Colorspace tag stored in the header. Purely informative: every channel is
/// encoded losslessly either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Colorspace {
    /// sRGB with linear alpha.
    #[default]
    Srgb = 0,
    /// All channels linear.
    Linear = 1,
}

impl Colorspace {
    pub(crate) const fn from_u8(value: u8) -> Result<Colorspace, QoiError> {
        match value {
            0 => Ok(Colorspace::Srgb),
            1 => Ok(Colorspace::Linear),
            other => Err(QoiError::InvalidColorspace(other)),
        }
    }
}

/// Requested channel count for decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeChannels {
    /// Use the channel count stored in the stream.
    #[default]
    Source,
    /// Emit 3-channel RGB, dropping alpha if the stream carries it.
    Rgb,
    /// Emit 4-channel RGBA, synthesizing opaque alpha for RGB streams.
    Rgba,
}

impl DecodeChannels {
    pub(crate) const fn resolve(self, stored: Channels) -> Channels {
        match self {
            DecodeChannels::Source => stored,
            DecodeChannels::Rgb => Channels::Rgb,
            DecodeChannels::Rgba => Channels::Rgba,
        }
    }
}

impl TryFrom<u8> for DecodeChannels {
    type Error = QoiError;

    /// `0` means "use the stored channel count"; `3` and `4` force an output
    /// layout. Anything else is an invalid argument.
    fn try_from(value: u8) -> Result<Self, QoiError> {
        match value {
            0 => Ok(DecodeChannels::Source),
            3 => Ok(DecodeChannels::Rgb),
            4 => Ok(DecodeChannels::Rgba),
            other => Err(QoiError::InvalidChannelCount(other)),
        }
    }
}

/// Image metadata: dimensions, channel count and colorspace tag.
///
/// A descriptor is valid when both dimensions are nonzero and
/// `height < PIXELS_MAX / width`, which guards every later
/// `width * height * channels` multiplication against overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QoiDescriptor {
    pub width: u32,
    pub height: u32,
    pub channels: Channels,
    pub colorspace: Colorspace,
}

impl QoiDescriptor {
    pub const fn new(width: u32, height: u32, channels: Channels, colorspace: Colorspace) -> Self {
        Self {
            width,
            height,
            channels,
            colorspace,
        }
    }

    /// Check dimension bounds. Called eagerly by both encode and decode
    /// before any allocation or per-pixel work.
    pub fn validate(&self) -> Result<(), QoiError> {
        if self.width == 0 {
            return Err(QoiError::InvalidHeader("width is zero".into()));
        }
        if self.height == 0 {
            return Err(QoiError::InvalidHeader("height is zero".into()));
        }
        if u64::from(self.height) >= PIXELS_MAX / u64::from(self.width) {
            return Err(QoiError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Number of pixels. Only meaningful after [`validate`](Self::validate).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Raw buffer size for this descriptor: `width * height * channels`.
    pub fn pixel_bytes(&self) -> usize {
        self.pixel_count() * self.channels.count()
    }

    /// Conservative upper bound on the encoded size: every pixel as a
    /// worst-case literal plus header and trailer.
    pub fn max_encoded_len(&self) -> usize {
        self.pixel_count() * (self.channels.count() + 1)
            + crate::header::HEADER_SIZE
            + crate::header::TRAILER.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let d = QoiDescriptor::new(0, 4, Channels::Rgb, Colorspace::Srgb);
        assert!(matches!(d.validate(), Err(QoiError::InvalidHeader(_))));
        let d = QoiDescriptor::new(4, 0, Channels::Rgb, Colorspace::Srgb);
        assert!(matches!(d.validate(), Err(QoiError::InvalidHeader(_))));
    }

    #[test]
    fn rejects_pixel_count_overflow() {
        // 20_000 * 20_000 == PIXELS_MAX exactly; the guard is strict.
        let d = QoiDescriptor::new(20_000, 20_000, Channels::Rgba, Colorspace::Srgb);
        assert!(matches!(
            d.validate(),
            Err(QoiError::DimensionsTooLarge { .. })
        ));
        let d = QoiDescriptor::new(20_000, 19_999, Channels::Rgba, Colorspace::Srgb);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn decode_channels_from_u8() {
        assert_eq!(DecodeChannels::try_from(0).unwrap(), DecodeChannels::Source);
        assert_eq!(DecodeChannels::try_from(3).unwrap(), DecodeChannels::Rgb);
        assert_eq!(DecodeChannels::try_from(4).unwrap(), DecodeChannels::Rgba);
        assert!(matches!(
            DecodeChannels::try_from(2),
            Err(QoiError::InvalidChannelCount(2))
        ));
    }
}
