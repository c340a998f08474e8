// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state shared by the editor and the signature pad, kept apart
//! from the components that own it.

pub mod drag;

// Re-export commonly used types for convenience
pub use drag::DragState;
