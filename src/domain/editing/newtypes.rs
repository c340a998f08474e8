// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for composition values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds.
pub mod zoom_bounds {
    /// Smallest accepted zoom factor; zero and negative input is raised to this.
    pub const MIN: f32 = 0.01;
    /// Largest accepted zoom factor; `+inf` lands here.
    pub const MAX: f32 = 1000.0;
    /// Default zoom factor (1.0 = source pixels map 1:1 to canvas pixels).
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom multiplier, guaranteed to be strictly positive and finite.
///
/// The pan conversion divides by this value, so zero must never be
/// representable. NaN carries no intent and maps to the default.
///
/// # Example
///
/// ```
/// use snapsign::domain::editing::ZoomFactor;
///
/// assert_eq!(ZoomFactor::new(2.0).value(), 2.0);
/// assert!(ZoomFactor::new(0.0).value() > 0.0);
/// assert_eq!(ZoomFactor::new(f32::NAN).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Converts a pointer delta in canvas pixels to pre-scale units.
    #[must_use]
    pub fn unscale(self, delta: f32) -> f32 {
        delta / self.0
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

// =============================================================================
// Adjustment Bounds
// =============================================================================

/// Adjustment bounds (0% to 200%).
pub mod adjustment_bounds {
    /// Minimum adjustment value.
    pub const MIN: i32 = 0;
    /// Maximum adjustment value.
    pub const MAX: i32 = 200;
    /// Default (neutral) adjustment value.
    pub const DEFAULT: i32 = 100;
}

// =============================================================================
// AdjustmentPercent
// =============================================================================

/// Brightness/contrast percentage, guaranteed to be within valid range (0 to 200).
///
/// 100 means no adjustment. Brightness multiplies each channel by `value / 100`;
/// contrast scales each channel's distance from mid-gray by the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjustmentPercent(i32);

impl AdjustmentPercent {
    /// Creates a new adjustment value, clamping to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(adjustment_bounds::MIN, adjustment_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns the adjustment as a multiplier (e.g., 100% → 1.0, 150% → 1.5).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_factor(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Returns whether this represents no adjustment (value is 100).
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == adjustment_bounds::DEFAULT
    }

    /// Returns whether the adjustment is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= adjustment_bounds::MIN
    }

    /// Returns whether the adjustment is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= adjustment_bounds::MAX
    }
}

impl Default for AdjustmentPercent {
    fn default() -> Self {
        Self(adjustment_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
