// SPDX-License-Identifier: MPL-2.0
//! `snapsign` is the capture-and-composition pipeline behind signed client
//! documents.
//!
//! It composes a photo under pan, zoom, rotation and brightness/contrast
//! adjustments, captures a freehand signature, and binds both to an explicit
//! agreement in a gated signing wizard. The wizard emits one immutable
//! [`SigningArtifact`](domain::signing::SigningArtifact).
//!
//! Nothing here depends on a GUI toolkit: hosts feed pointer events and
//! messages in and render the snapshots the components expose.

#![doc(html_root_url = "https://docs.rs/snapsign/0.1.0")]

pub mod application;
pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
