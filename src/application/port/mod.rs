// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the capture service stays
//! independent of any concrete camera backend.
//!
//! # Available Ports
//!
//! - [`camera`]: Camera access, live streams and preview sinks
//!
//! # Example
//!
//! ```ignore
//! use snapsign::application::port::{CameraDevice, PermissionResponder};
//!
//! struct NoCamera;
//!
//! impl CameraDevice for NoCamera {
//!     fn request_access(&mut self, responder: PermissionResponder) {
//!         responder.deny(snapsign::error::CameraError::DeviceUnavailable);
//!     }
//! }
//! ```

pub mod camera;

// Re-export main types for convenience
pub use camera::{AccessResult, CameraDevice, CameraStream, PermissionResponder, PreviewSink};
