// SPDX-License-Identifier: MPL-2.0
//! Composition parameters for one editing session.

use super::newtypes::{AdjustmentPercent, ZoomFactor};

/// Pan offset in pre-scale (source image) units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Everything the composition step needs besides the source bitmap.
///
/// Rotation is kept in raw degrees and never wrapped; it only feeds a
/// periodic transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    pub zoom: ZoomFactor,
    pub rotation_degrees: f32,
    pub pan: PanOffset,
    pub brightness: AdjustmentPercent,
    pub contrast: AdjustmentPercent,
}

impl TransformState {
    /// Applies a pointer-drag delta measured in canvas pixels.
    ///
    /// The delta is divided by the current zoom so that the image tracks the
    /// pointer at any magnification.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan.x += self.zoom.unscale(dx);
        self.pan.y += self.zoom.unscale(dy);
    }

    /// Returns true when the pixel filter is a no-op.
    #[must_use]
    pub fn has_neutral_filter(&self) -> bool {
        self.brightness.is_neutral() && self.contrast.is_neutral()
    }

    /// Restores zoom 1, rotation 0, pan (0, 0), brightness and contrast 100.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_matches_session_reset_values() {
        let state = TransformState::default();
        assert_abs_diff_eq!(state.zoom.value(), 1.0);
        assert_abs_diff_eq!(state.rotation_degrees, 0.0);
        assert_eq!(state.pan, PanOffset::new(0.0, 0.0));
        assert_eq!(state.brightness.value(), 100);
        assert_eq!(state.contrast.value(), 100);
        assert!(state.has_neutral_filter());
    }

    #[test]
    fn pan_is_divided_by_zoom() {
        let mut state = TransformState {
            zoom: ZoomFactor::new(2.0),
            ..TransformState::default()
        };
        state.pan_by(10.0, -4.0);
        assert_abs_diff_eq!(state.pan.x, 5.0);
        assert_abs_diff_eq!(state.pan.y, -2.0);
    }

    #[test]
    fn pan_sum_is_independent_of_batching() {
        let deltas = [3.0_f32, -1.5, 7.25, 0.5, -2.0, 11.0];
        let zoom = ZoomFactor::new(3.0);

        let mut one_by_one = TransformState {
            zoom,
            ..TransformState::default()
        };
        for d in deltas {
            one_by_one.pan_by(d, d);
        }

        let mut batched = TransformState {
            zoom,
            ..TransformState::default()
        };
        for pair in deltas.chunks(2) {
            let sum: f32 = pair.iter().sum();
            batched.pan_by(sum, sum);
        }

        let expected: f32 = deltas.iter().map(|d| d / 3.0).sum();
        assert_abs_diff_eq!(one_by_one.pan.x, expected, epsilon = 1e-4);
        assert_abs_diff_eq!(batched.pan.x, expected, epsilon = 1e-4);
        assert_abs_diff_eq!(batched.pan.y, one_by_one.pan.y, epsilon = 1e-4);
    }

    #[test]
    fn rotation_is_not_normalized() {
        let mut state = TransformState::default();
        state.rotation_degrees = 725.0;
        assert_abs_diff_eq!(state.rotation_degrees, 725.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = TransformState {
            zoom: ZoomFactor::new(5.0),
            rotation_degrees: 90.0,
            pan: PanOffset::new(3.0, 4.0),
            brightness: AdjustmentPercent::new(10),
            contrast: AdjustmentPercent::new(190),
        };
        state.reset();
        assert_eq!(state, TransformState::default());
    }
}
