// SPDX-License-Identifier: MPL-2.0
//! Signing domain types.
//!
//! - [`SignatureDrawing`]: Ordered [`StrokePath`]s with the `has_ink` flag
//! - [`WizardState`] and [`Readiness`]: The gated three-step flow
//! - [`SigningArtifact`]: The immutable photo + signature pair

pub mod artifact;
pub mod drawing;
pub mod state;

pub use artifact::SigningArtifact;
pub use drawing::{SignatureDrawing, StrokePath};
pub use state::{Readiness, WizardState};
