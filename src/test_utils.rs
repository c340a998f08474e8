// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers: float assertions and a known-layout fixture image.
//!
//! Float comparisons go through `approx`, which handles rounding in the
//! pan and zoom math where `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::domain::media::EncodedImage;

#[path = "../tests/common/mod.rs"]
mod quadrant;

pub use quadrant::{BLUE, GRAY, RED};

/// The integration suite's quadrant PNG as an [`EncodedImage`].
pub fn quadrant_placeholder() -> EncodedImage {
    EncodedImage::from_bytes(quadrant::quadrant_png())
}
