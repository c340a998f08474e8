// SPDX-License-Identifier: MPL-2.0
//! Brightness and contrast filters evaluated in source-pixel space.
//!
//! Semantics follow the common CSS filter functions: brightness multiplies
//! each color channel by `percent / 100`, contrast scales each channel's
//! distance from mid-gray by `percent / 100`. Brightness is applied first.
//! Alpha is never touched.

use crate::domain::editing::AdjustmentPercent;
use image_rs::RgbaImage;

/// Returns a filtered copy of `source`.
///
/// Neutral settings return a plain clone.
#[must_use]
pub fn apply(
    source: &RgbaImage,
    brightness: AdjustmentPercent,
    contrast: AdjustmentPercent,
) -> RgbaImage {
    let mut out = source.clone();
    if brightness.is_neutral() && contrast.is_neutral() {
        return out;
    }

    let lut = build_lut(brightness, contrast);
    for pixel in out.pixels_mut() {
        let [r, g, b, _] = &mut pixel.0;
        *r = lut[usize::from(*r)];
        *g = lut[usize::from(*g)];
        *b = lut[usize::from(*b)];
    }
    out
}

/// 256-entry channel lookup table for the combined filter.
#[must_use]
pub fn build_lut(brightness: AdjustmentPercent, contrast: AdjustmentPercent) -> [u8; 256] {
    let b = brightness.as_factor();
    let c = contrast.as_factor();
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let v = value as f32 / 255.0;
        let brightened = (v * b).clamp(0.0, 1.0);
        let contrasted = ((brightened - 0.5) * c + 0.5).clamp(0.0, 1.0);
        // Clamped to 0..=255 above, so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            *slot = (contrasted * 255.0).round() as u8;
        }
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn solid(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba([value, value, value, 200]))
    }

    #[test]
    fn neutral_filter_is_identity() {
        let src = solid(77);
        let out = apply(&src, AdjustmentPercent::default(), AdjustmentPercent::default());
        assert_eq!(out, src);
    }

    #[test]
    fn neutral_lut_is_identity() {
        let lut = build_lut(AdjustmentPercent::default(), AdjustmentPercent::default());
        for (i, v) in lut.iter().enumerate() {
            assert_eq!(usize::from(*v), i);
        }
    }

    #[test]
    fn brightness_scales_channels() {
        let out = apply(
            &solid(100),
            AdjustmentPercent::new(150),
            AdjustmentPercent::default(),
        );
        assert_eq!(out.get_pixel(0, 0).0, [150, 150, 150, 200]);
    }

    #[test]
    fn zero_brightness_is_black_with_alpha_kept() {
        let out = apply(
            &solid(220),
            AdjustmentPercent::new(0),
            AdjustmentPercent::default(),
        );
        assert_eq!(out.get_pixel(1, 1).0, [0, 0, 0, 200]);
    }

    #[test]
    fn zero_contrast_is_mid_gray() {
        let out = apply(
            &solid(10),
            AdjustmentPercent::default(),
            AdjustmentPercent::new(0),
        );
        assert_eq!(out.get_pixel(0, 0).0[0], 128);
    }

    #[test]
    fn high_contrast_pushes_away_from_mid_gray() {
        let lut = build_lut(AdjustmentPercent::default(), AdjustmentPercent::new(200));
        assert!(lut[200] > 200);
        assert!(lut[50] < 50);
    }

    #[test]
    fn brightness_is_applied_before_contrast() {
        // Halving 100 gives 50, which 200% contrast pushes to black. The
        // other order would land on 36.
        let lut = build_lut(AdjustmentPercent::new(50), AdjustmentPercent::new(200));
        assert_eq!(lut[100], 0);
    }
}
