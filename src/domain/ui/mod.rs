// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains input value objects that are independent
//! of any presentation framework.

pub mod pointer;

// Re-export commonly used types
pub use pointer::{Point, PointerEvent};
