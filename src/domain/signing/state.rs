// SPDX-License-Identifier: MPL-2.0
//! Signing wizard states and their forward guards.

/// Step of the signing flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardState {
    #[default]
    CapturingPhoto,
    CapturingSignature,
    ConfirmingAgreement,
    /// Terminal: the artifact has been emitted.
    Signed,
    /// Terminal: the flow was abandoned without emitting anything.
    Cancelled,
}

impl WizardState {
    /// Returns true for `Signed` and `Cancelled`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, WizardState::Signed | WizardState::Cancelled)
    }

    /// One-based step number for progress display, `None` once terminal.
    #[must_use]
    pub fn step_number(self) -> Option<u8> {
        match self {
            WizardState::CapturingPhoto => Some(1),
            WizardState::CapturingSignature => Some(2),
            WizardState::ConfirmingAgreement => Some(3),
            WizardState::Signed | WizardState::Cancelled => None,
        }
    }

    /// Where `back()` leads from this state, if anywhere.
    #[must_use]
    pub fn previous(self) -> Option<WizardState> {
        match self {
            WizardState::CapturingSignature => Some(WizardState::CapturingPhoto),
            WizardState::ConfirmingAgreement => Some(WizardState::CapturingSignature),
            _ => None,
        }
    }
}

/// Readiness flags the forward guards are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Readiness {
    pub has_photo: bool,
    pub has_ink: bool,
    pub agreed: bool,
}

impl Readiness {
    /// Target of a forward move from `state`, or `None` when the guard fails
    /// or the state has no forward edge.
    #[must_use]
    pub fn next(self, state: WizardState) -> Option<WizardState> {
        match state {
            WizardState::CapturingPhoto if self.has_photo => Some(WizardState::CapturingSignature),
            WizardState::CapturingSignature if self.has_photo && self.has_ink => {
                Some(WizardState::ConfirmingAgreement)
            }
            WizardState::ConfirmingAgreement if self.can_sign() => Some(WizardState::Signed),
            _ => None,
        }
    }

    /// All three preconditions for a signed artifact.
    #[must_use]
    pub fn can_sign(self) -> bool {
        self.has_photo && self.has_ink && self.agreed
    }
}
