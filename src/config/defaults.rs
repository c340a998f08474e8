// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the capture pipeline. Constants are organized by category.
//!
//! # Categories
//!
//! - **Editor**: Composition canvas size and background
//! - **Signature**: Signature pad size, ink and background

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Default composition canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 400;

/// Default composition canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Neutral gray shown where the source image does not cover the canvas.
pub const DEFAULT_CANVAS_BACKGROUND: [u8; 4] = [229, 231, 235, 255];

/// Largest canvas edge accepted from configuration.
pub const MAX_CANVAS_EDGE: u32 = 8192;

// ==========================================================================
// Signature Defaults
// ==========================================================================

/// Default signature pad width in pixels.
pub const DEFAULT_SIGNATURE_WIDTH: u32 = 500;

/// Default signature pad height in pixels.
pub const DEFAULT_SIGNATURE_HEIGHT: u32 = 200;

/// Default pen width in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Default ink color (near-black).
pub const DEFAULT_INK_COLOR: [u8; 4] = [17, 24, 39, 255];

/// Default signature background (white).
pub const DEFAULT_SIGNATURE_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_CANVAS_WIDTH > 0 && DEFAULT_CANVAS_WIDTH <= MAX_CANVAS_EDGE);
    assert!(DEFAULT_CANVAS_HEIGHT > 0 && DEFAULT_CANVAS_HEIGHT <= MAX_CANVAS_EDGE);
    assert!(DEFAULT_SIGNATURE_WIDTH > 0 && DEFAULT_SIGNATURE_WIDTH <= MAX_CANVAS_EDGE);
    assert!(DEFAULT_SIGNATURE_HEIGHT > 0 && DEFAULT_SIGNATURE_HEIGHT <= MAX_CANVAS_EDGE);
    assert!(DEFAULT_STROKE_WIDTH > 0.0);
};
