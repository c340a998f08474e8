// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types and rules of the capture pipeline.
//!
//! Nothing in here touches pixels, devices or encoders. The types are plain
//! values that the media, capture and UI layers pass around.
//!
//! # Modules
//!
//! - [`editing`]: Composition parameters ([`ZoomFactor`](editing::ZoomFactor),
//!   [`AdjustmentPercent`](editing::AdjustmentPercent),
//!   [`TransformState`](editing::TransformState))
//! - [`media`]: Image payloads ([`RawImage`](media::RawImage),
//!   [`EncodedImage`](media::EncodedImage))
//! - [`signing`]: Signature and wizard types ([`SignatureDrawing`](signing::SignatureDrawing),
//!   [`WizardState`](signing::WizardState), [`SigningArtifact`](signing::SigningArtifact))
//! - [`ui`]: Input value objects ([`Point`](ui::Point), [`PointerEvent`](ui::PointerEvent))

pub mod editing;
pub mod media;
pub mod signing;
pub mod ui;
