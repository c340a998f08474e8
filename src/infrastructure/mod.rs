// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`still_camera`]: Virtual camera serving a fixed frame (implements [`CameraDevice`])
//!
//! [`CameraDevice`]: crate::application::port::CameraDevice

pub mod still_camera;

// Re-export main types for convenience
pub use still_camera::{AccessBehavior, CameraProbe, PromptHandle, StillCamera};
