// SPDX-License-Identifier: MPL-2.0
//! Interactive components and their state.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `update(Message) -> Event` alongside direct methods, and none of
//! them depends on a GUI framework. Pointer input arrives as
//! [`PointerEvent`](crate::domain::ui::PointerEvent), whatever the device.
//!
//! # Components
//!
//! - [`image_editor`] - Pan/zoom/rotate/brightness/contrast over a photo
//! - [`signature_pad`] - Freehand signature capture
//! - [`signing_wizard`] - Gated photo, signature and agreement flow
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (drag)

pub mod image_editor;
pub mod signature_pad;
pub mod signing_wizard;
pub mod state;
