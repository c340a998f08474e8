// SPDX-License-Identifier: MPL-2.0
//! Still image encoding and decoding.
//!
//! Every image leaving the pipeline (edited photo, camera still, signature)
//! goes through [`encode_rgba`]; every image entering it through [`decode`].

use crate::domain::media::EncodedImage;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG format (lossless, keeps alpha).
    #[default]
    Png,
    /// JPEG format (lossy, alpha is flattened).
    Jpeg,
    /// WebP format (lossless, keeps alpha).
    WebP,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    /// Returns the MIME type callers attach to stored records.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::WebP => "image/webp",
        }
    }

    /// Returns the image format for the `image` crate.
    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }
}

/// Encodes straight-alpha RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the buffer does not match the dimensions or
/// the encoder fails.
pub fn encode_rgba(
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    format: ExportFormat,
) -> Result<EncodedImage> {
    let img: RgbaImage = ImageBuffer::<Rgba<u8>, _>::from_raw(width, height, rgba)
        .ok_or_else(|| Error::Encode("pixel buffer does not match dimensions".to_string()))?;

    let mut out = Cursor::new(Vec::new());
    // JPEG doesn't support alpha
    if format == ExportFormat::Jpeg {
        DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .write_to(&mut out, format.image_format())?;
    } else {
        img.write_to(&mut out, format.image_format())?;
    }

    Ok(EncodedImage::from_bytes(out.into_inner()))
}

/// Decodes any supported raster format to straight-alpha RGBA.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a valid raster image.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image_rs::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_format_extensions() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
        assert_eq!(ExportFormat::WebP.extension(), "webp");
    }

    #[test]
    fn export_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(
            ExportFormat::from_extension("jpeg"),
            Some(ExportFormat::Jpeg)
        );
        assert_eq!(ExportFormat::from_extension("bmp"), None);
    }

    #[test]
    fn export_format_default_is_png() {
        assert_eq!(ExportFormat::default(), ExportFormat::Png);
        assert_eq!(ExportFormat::default().mime_type(), "image/png");
    }

    #[test]
    fn png_encoding_is_lossless() {
        let pixels: Vec<u8> = (0..4 * 3 * 2).map(|i| (i * 10) as u8).collect();
        let encoded = encode_rgba(3, 2, pixels.clone(), ExportFormat::Png).expect("encode");
        let decoded = decode(encoded.bytes()).expect("decode");
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), pixels);
    }

    #[test]
    fn jpeg_encoding_drops_alpha_but_keeps_size() {
        let encoded =
            encode_rgba(8, 8, vec![128u8; 8 * 8 * 4], ExportFormat::Jpeg).expect("encode");
        let decoded = decode(encoded.bytes()).expect("decode");
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn mismatched_buffer_is_an_encode_error() {
        let err = encode_rgba(4, 4, vec![0u8; 3], ExportFormat::Png).expect_err("must fail");
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode(b"not an image").expect_err("must fail");
        assert!(matches!(err, Error::Decode(_)));
    }
}
