// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::sync::Arc;

/// Decoded RGBA pixels, straight alpha, row-major.
///
/// Carries live camera frames and canvas snapshots. The buffer is shared, so
/// cloning a frame for a preview sink is cheap.
///
/// # Example
///
/// ```
/// use snapsign::domain::media::RawImage;
///
/// let frame = RawImage::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]);
///
/// assert_eq!(frame.dimensions(), (2, 1));
/// assert_eq!(frame.pixel(1, 0), Some([0, 0, 255, 255]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl RawImage {
    /// # Panics
    ///
    /// Panics if `pixels` does not hold exactly `width * height` RGBA texels.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Self {
        let pixels = pixels.into();
        let texels = (width as usize) * (height as usize);
        assert_eq!(
            pixels.len(),
            texels * 4,
            "frame of {width}x{height} needs {} bytes",
            texels * 4
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The whole RGBA buffer.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let texel = self.pixels.get(offset..offset + 4)?;
        Some([texel[0], texel[1], texel[2], texel[3]])
    }
}

/// An encoded still image (PNG, JPEG, WebP...).
///
/// The bytes are shared, so handing the same photo to several collaborators
/// never copies the payload. Equality compares the encoded bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Arc<[u8]>,
}

impl EncodedImage {
    /// Wraps already-encoded bytes, e.g. from a file picker.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Returns the encoded payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for an empty payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("len", &self.bytes.len())
            .finish()
    }
}
