// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for image composition:
//! - [`ZoomFactor`]: Strictly positive zoom multiplier
//! - [`AdjustmentPercent`]: Brightness/contrast percentage (0–200)
//! - [`TransformState`]: The full set of composition parameters

pub mod newtypes;
pub mod transform;

pub use newtypes::{AdjustmentPercent, ZoomFactor};
pub use transform::{PanOffset, TransformState};
