// SPDX-License-Identifier: MPL-2.0
//! Pixel-level work: composition, filtering and encoding.
//!
//! - [`raster_surface`]: The composition target used by the image editor
//! - [`pixel_filter`]: Brightness/contrast in source-pixel space
//! - [`export`]: Encoding to PNG/JPEG/WebP and decoding of caller input
//! - [`pixmap`]: Conversions between `image` buffers and `tiny-skia` pixmaps

pub mod export;
pub mod pixel_filter;
pub mod pixmap;
pub mod raster_surface;

// Re-export commonly used types
pub use export::ExportFormat;
pub use raster_surface::{RasterSurface, SurfaceSize};
