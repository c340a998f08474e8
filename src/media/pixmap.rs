// SPDX-License-Identifier: MPL-2.0
//! Conversions between `image` buffers (straight alpha) and `tiny-skia`
//! pixmaps (premultiplied alpha).

use crate::domain::media::RawImage;
use image_rs::RgbaImage;
use tiny_skia::{Color, ColorU8, Pixmap};

/// Copies a straight-alpha image into a new premultiplied pixmap.
///
/// Returns `None` for zero-sized images.
#[must_use]
pub fn from_rgba_image(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Returns the pixmap as straight-alpha RGBA bytes.
#[must_use]
pub fn to_rgba_bytes(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

/// Returns the pixmap as a domain [`RawImage`] for preview sinks.
#[must_use]
pub fn to_raw_image(pixmap: &Pixmap) -> RawImage {
    RawImage::new(pixmap.width(), pixmap.height(), to_rgba_bytes(pixmap))
}

/// Straight-alpha color of one pixel.
#[must_use]
pub fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<[u8; 4]> {
    let c = pixmap.pixel(x, y)?.demultiply();
    Some([c.red(), c.green(), c.blue(), c.alpha()])
}

#[must_use]
pub fn color(rgba: [u8; 4]) -> Color {
    Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    #[test]
    fn opaque_pixels_survive_round_trip() {
        let mut image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        image.put_pixel(2, 1, Rgba([200, 100, 0, 255]));

        let pixmap = from_rgba_image(&image).expect("non-empty");
        assert_eq!(to_rgba_bytes(&pixmap), image.into_raw());
        assert_eq!(pixel_at(&pixmap, 2, 1), Some([200, 100, 0, 255]));
        assert_eq!(pixel_at(&pixmap, 3, 0), None);
    }

    #[test]
    fn raw_image_has_pixmap_dimensions() {
        let pixmap = Pixmap::new(5, 4).expect("non-empty");
        let raw = to_raw_image(&pixmap);
        assert_eq!((raw.width(), raw.height()), (5, 4));
    }
}
