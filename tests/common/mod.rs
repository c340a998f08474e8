// SPDX-License-Identifier: MPL-2.0
//! Known-layout fixture image shared by unit and integration tests.
//!
//! Only depends on `image`, so the crate's own test modules can include the
//! same file.

use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Top-left quadrant color of [`quadrant_png`].
pub const RED: [u8; 4] = [220, 20, 60, 255];
/// Fill color of the rest of [`quadrant_png`].
pub const BLUE: [u8; 4] = [30, 60, 200, 255];
/// Canvas background used by surface fixtures.
pub const GRAY: [u8; 4] = [229, 231, 235, 255];

/// 100x100 PNG whose top-left 50x50 quadrant is [`RED`], everything else
/// [`BLUE`]. Pixel positions after a transform follow directly from this.
pub fn quadrant_png() -> Vec<u8> {
    let image = RgbaImage::from_fn(100, 100, |x, y| {
        if x < 50 && y < 50 {
            Rgba(RED)
        } else {
            Rgba(BLUE)
        }
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode placeholder");
    bytes
}
