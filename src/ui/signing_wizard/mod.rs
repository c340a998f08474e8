// SPDX-License-Identifier: MPL-2.0
//! Gated signing flow: photo, then signature, then explicit agreement.
//!
//! ```text
//! CapturingPhoto --(photo accepted)--> CapturingSignature
//! CapturingSignature --(has ink, advance)--> ConfirmingAgreement
//! ConfirmingAgreement --(agreed, confirm)--> Signed   [artifact emitted once]
//! any non-terminal --(cancel)--> Cancelled            [nothing emitted]
//! ```
//!
//! Forward moves are computed by [`Readiness::next`]; a move whose guard
//! fails is silently ignored. Once terminal, every mutation is ignored.
//! Leaving the flow by any path stops the photo step's camera.

use crate::capture::CameraCaptureService;
use crate::config::Config;
use crate::domain::media::EncodedImage;
use crate::domain::signing::{Readiness, SigningArtifact, WizardState};
use crate::domain::ui::PointerEvent;
use crate::error::Result;
use crate::media::ExportFormat;
use crate::ui::image_editor::{self, ImageTransformEditor};
use crate::ui::signature_pad::SignaturePad;
use chrono::Utc;

mod messages;
mod stack;

pub use messages::{Event, Message};
pub use stack::{StackEvent, WizardStack};

pub struct SigningWizard {
    state: WizardState,
    editor: ImageTransformEditor,
    photo: Option<EncodedImage>,
    pad: SignaturePad,
    agreed: bool,
    agreement_text: String,
    signature_format: ExportFormat,
    /// Artifacts of nested flows completed while this one was suspended
    attachments: Vec<SigningArtifact>,
}

impl std::fmt::Debug for SigningWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningWizard")
            .field("state", &self.state)
            .field("readiness", &self.readiness())
            .field("attachments", &self.attachments.len())
            .finish_non_exhaustive()
    }
}

impl SigningWizard {
    #[must_use]
    pub fn new(
        editor: ImageTransformEditor,
        pad: SignaturePad,
        agreement_text: impl Into<String>,
    ) -> Self {
        Self {
            state: WizardState::default(),
            editor,
            photo: None,
            pad,
            agreed: false,
            agreement_text: agreement_text.into(),
            signature_format: ExportFormat::default(),
            attachments: Vec::new(),
        }
    }

    /// Builds a wizard with the configured editor canvas, signature pad and
    /// output format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Surface`] if either canvas is zero-sized.
    pub fn from_config(config: &Config, agreement_text: impl Into<String>) -> Result<Self> {
        let editor = ImageTransformEditor::from_config(config)?;
        let pad = SignaturePad::from_config(&config.signature)?;
        let mut wizard = Self::new(editor, pad, agreement_text);
        wizard.signature_format = config.export_format();
        Ok(wizard)
    }

    /// Attaches a camera to the photo step.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraCaptureService) -> Self {
        self.editor = self.editor.with_camera(camera);
        self
    }

    // -------------------------------------------------------------------------
    // Step 1: photo
    // -------------------------------------------------------------------------

    /// Takes `photo` as the working photo and moves on to the signature step.
    /// Only accepted while capturing the photo. Returns true if accepted.
    pub fn accept_photo(&mut self, photo: EncodedImage) -> bool {
        if self.state != WizardState::CapturingPhoto {
            tracing::debug!(state = ?self.state, "photo ignored outside photo step");
            return false;
        }
        self.editor.close();
        self.photo = Some(photo);
        self.go_forward()
    }

    /// The embedded photo editor, for hosts driving it directly.
    pub fn editor_mut(&mut self) -> &mut ImageTransformEditor {
        &mut self.editor
    }

    #[must_use]
    pub fn editor(&self) -> &ImageTransformEditor {
        &self.editor
    }

    #[must_use]
    pub fn photo(&self) -> Option<&EncodedImage> {
        self.photo.as_ref()
    }

    // -------------------------------------------------------------------------
    // Step 2: signature
    // -------------------------------------------------------------------------

    /// Routes pointer input to the pad while on the signature step.
    pub fn pointer(&mut self, event: PointerEvent) {
        if self.state == WizardState::CapturingSignature {
            self.pad.pointer(event);
        }
    }

    pub fn clear_signature(&mut self) {
        if self.state == WizardState::CapturingSignature {
            self.pad.clear();
        }
    }

    #[must_use]
    pub fn pad(&self) -> &SignaturePad {
        &self.pad
    }

    // -------------------------------------------------------------------------
    // Step 3: agreement
    // -------------------------------------------------------------------------

    /// Records the acknowledgment checkbox. Only meaningful on the
    /// agreement step.
    pub fn set_agreed(&mut self, agreed: bool) {
        if self.state == WizardState::ConfirmingAgreement {
            self.agreed = agreed;
        }
    }

    /// Text shown verbatim on the agreement step.
    #[must_use]
    pub fn agreement_text(&self) -> &str {
        &self.agreement_text
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> WizardState {
        self.state
    }

    #[must_use]
    pub fn readiness(&self) -> Readiness {
        Readiness {
            has_photo: self.photo.is_some(),
            has_ink: self.pad.has_ink(),
            agreed: self.agreed,
        }
    }

    /// Moves to the next non-terminal step if its guard holds. Signing
    /// itself goes through [`Self::confirm`]. Returns true if the state
    /// changed.
    pub fn advance(&mut self) -> bool {
        if self.state == WizardState::ConfirmingAgreement {
            return false;
        }
        self.go_forward()
    }

    fn go_forward(&mut self) -> bool {
        match self.readiness().next(self.state) {
            Some(next) if !next.is_terminal() => {
                tracing::debug!(from = ?self.state, to = ?next, "wizard advanced");
                self.state = next;
                true
            }
            _ => {
                tracing::debug!(
                    state = ?self.state,
                    readiness = ?self.readiness(),
                    "advance guard not met"
                );
                false
            }
        }
    }

    /// Steps back one page. Leaving the agreement step withdraws the
    /// acknowledgment. Returns true if the state changed.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.state.previous() else {
            return false;
        };
        if self.state == WizardState::ConfirmingAgreement {
            self.agreed = false;
        }
        tracing::debug!(from = ?self.state, to = ?previous, "wizard went back");
        self.state = previous;
        true
    }

    // -------------------------------------------------------------------------
    // Terminal transitions
    // -------------------------------------------------------------------------

    /// Builds the signed artifact and enters [`WizardState::Signed`].
    ///
    /// Returns `Ok(None)` unless on the agreement step with every
    /// precondition met, so repeated calls after signing emit nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Encode`] if the signature cannot be
    /// encoded; the wizard stays on the agreement step.
    pub fn confirm(&mut self) -> Result<Option<SigningArtifact>> {
        if self.state != WizardState::ConfirmingAgreement || !self.readiness().can_sign() {
            tracing::debug!(state = ?self.state, "confirm ignored");
            return Ok(None);
        }
        let Some(photo) = self.photo.clone() else {
            return Ok(None);
        };
        let signature = self.pad.export_raster(self.signature_format)?;

        let artifact = SigningArtifact::new(photo, signature, Utc::now());
        self.state = WizardState::Signed;
        self.editor.close();
        tracing::info!(
            fingerprint = %artifact.fingerprint(),
            attachments = self.attachments.len(),
            "signing artifact emitted"
        );
        Ok(Some(artifact))
    }

    /// Abandons the flow from any non-terminal step. The camera is stopped
    /// either way. Returns true if the state changed.
    pub fn cancel(&mut self) -> bool {
        self.editor.close();
        if self.state.is_terminal() {
            return false;
        }
        tracing::debug!(from = ?self.state, "wizard cancelled");
        self.state = WizardState::Cancelled;
        true
    }

    // -------------------------------------------------------------------------
    // Nested flows
    // -------------------------------------------------------------------------

    /// Appends the artifact of a nested flow.
    pub fn attach(&mut self, artifact: SigningArtifact) {
        self.attachments.push(artifact);
    }

    #[must_use]
    pub fn attachments(&self) -> &[SigningArtifact] {
        &self.attachments
    }

    pub fn take_attachments(&mut self) -> Vec<SigningArtifact> {
        std::mem::take(&mut self.attachments)
    }

    // -------------------------------------------------------------------------
    // Message routing
    // -------------------------------------------------------------------------

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        if self.state.is_terminal() {
            if matches!(message, Message::Cancel) {
                self.editor.close();
            }
            return Event::None;
        }
        match message {
            Message::Editor(msg) => self.handle_editor_message(msg),
            Message::UsePhoto(photo) => self.step_event(|w| w.accept_photo(photo)),
            Message::Pointer(event) => {
                self.pointer(event);
                Event::None
            }
            Message::ClearSignature => {
                self.clear_signature();
                Event::None
            }
            Message::SetAgreed(agreed) => {
                self.set_agreed(agreed);
                Event::None
            }
            Message::Advance => self.step_event(Self::advance),
            Message::Back => self.step_event(Self::back),
            Message::Confirm => match self.confirm() {
                Ok(Some(artifact)) => Event::Signed(artifact),
                Ok(None) => Event::None,
                Err(err) => Event::Failed(err.to_string()),
            },
            Message::Cancel => {
                if self.cancel() {
                    Event::Cancelled
                } else {
                    Event::None
                }
            }
        }
    }

    fn handle_editor_message(&mut self, message: image_editor::Message) -> Event {
        if self.state != WizardState::CapturingPhoto {
            return Event::None;
        }
        match self.editor.update(message) {
            image_editor::Event::Confirmed(photo) => self.step_event(|w| w.accept_photo(photo)),
            image_editor::Event::None => Event::None,
            other => Event::Editor(other),
        }
    }

    fn step_event(&mut self, step: impl FnOnce(&mut Self) -> bool) -> Event {
        if step(self) {
            Event::StepChanged(self.state)
        } else {
            Event::None
        }
    }
}
