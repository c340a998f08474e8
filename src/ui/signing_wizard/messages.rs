// SPDX-License-Identifier: MPL-2.0
//! Wizard message/event types re-exported by the facade.

use crate::domain::media::EncodedImage;
use crate::domain::signing::{SigningArtifact, WizardState};
use crate::domain::ui::PointerEvent;
use crate::ui::image_editor;

/// Messages emitted by the wizard's step controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// Photo step: forwarded to the embedded editor
    Editor(image_editor::Message),
    /// Photo step: use a finished photo without going through the editor
    UsePhoto(EncodedImage),
    /// Signature step: pointer input for the pad
    Pointer(PointerEvent),
    ClearSignature,
    /// Agreement step: acknowledgment checkbox toggled
    SetAgreed(bool),
    Advance,
    Back,
    Confirm,
    Cancel,
}

impl From<image_editor::Message> for Message {
    fn from(message: image_editor::Message) -> Self {
        Message::Editor(message)
    }
}

/// Events propagated to the caller.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The wizard moved to another step
    StepChanged(WizardState),
    /// Emitted exactly once, on entering `Signed`
    Signed(SigningArtifact),
    /// The flow was abandoned; nothing was emitted
    Cancelled,
    /// Non-terminal editor event the host may want to surface (load
    /// failure, camera notice)
    Editor(image_editor::Event),
    /// Encoding the signature failed; the wizard stays on its step
    Failed(String),
}
