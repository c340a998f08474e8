// SPDX-License-Identifier: MPL-2.0
//! Nested signing sessions.
//!
//! A running flow can suspend itself to collect a related signature inline
//! (for example a co-signer). The inner flow is pushed on top; when it
//! signs, it is popped and its artifact is attached to the flow below, which
//! resumes where it left off. A cancelled inner flow just resumes the outer
//! one. Only the active (top) session receives messages.

use super::{Event, Message, SigningWizard};
use crate::domain::signing::SigningArtifact;

/// What happened to the stack after routing one message.
#[derive(Debug, Clone)]
pub enum StackEvent {
    /// Event of the active session that did not change the stack
    Active(Event),
    /// The inner session signed; its artifact is now attached to the
    /// session that resumed
    Resumed { depth: usize },
    /// The inner session was cancelled; the outer one resumed unchanged
    InnerCancelled { depth: usize },
    /// The outermost session signed
    Completed {
        artifact: SigningArtifact,
        attachments: Vec<SigningArtifact>,
    },
    /// The outermost session was cancelled
    Cancelled,
}

#[derive(Debug)]
pub struct WizardStack {
    sessions: Vec<SigningWizard>,
}

impl WizardStack {
    #[must_use]
    pub fn new(root: SigningWizard) -> Self {
        Self {
            sessions: vec![root],
        }
    }

    /// Suspends the active session and makes `inner` the active one.
    pub fn push(&mut self, inner: SigningWizard) {
        self.sessions.push(inner);
        tracing::debug!(depth = self.depth(), "nested signing session started");
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.sessions.len()
    }

    /// The session currently receiving input. The root is never popped, so
    /// there always is one.
    #[must_use]
    pub fn active(&self) -> &SigningWizard {
        let top = self.sessions.len() - 1;
        &self.sessions[top]
    }

    pub fn active_mut(&mut self) -> &mut SigningWizard {
        let top = self.sessions.len() - 1;
        &mut self.sessions[top]
    }

    /// Routes `message` to the active session and unwinds on completion.
    pub fn update(&mut self, message: Message) -> StackEvent {
        let event = self.active_mut().update(message);
        self.unwind(event)
    }

    /// Confirms the active session.
    ///
    /// # Errors
    ///
    /// Propagates the signature encoding failure of the active session.
    pub fn confirm_active(&mut self) -> crate::error::Result<StackEvent> {
        Ok(match self.active_mut().confirm()? {
            Some(artifact) => self.unwind(Event::Signed(artifact)),
            None => StackEvent::Active(Event::None),
        })
    }

    /// Cancels the active session.
    pub fn cancel_active(&mut self) -> StackEvent {
        if self.active_mut().cancel() {
            self.unwind(Event::Cancelled)
        } else {
            StackEvent::Active(Event::None)
        }
    }

    fn unwind(&mut self, event: Event) -> StackEvent {
        match event {
            Event::Signed(artifact) if self.depth() > 1 => {
                // dropping the inner session releases its camera
                self.sessions.pop();
                self.active_mut().attach(artifact);
                tracing::info!(depth = self.depth(), "nested session signed; outer resumed");
                StackEvent::Resumed {
                    depth: self.depth(),
                }
            }
            Event::Cancelled if self.depth() > 1 => {
                self.sessions.pop();
                tracing::debug!(depth = self.depth(), "nested session cancelled; outer resumed");
                StackEvent::InnerCancelled {
                    depth: self.depth(),
                }
            }
            Event::Signed(artifact) => StackEvent::Completed {
                artifact,
                attachments: self.active_mut().take_attachments(),
            },
            Event::Cancelled => StackEvent::Cancelled,
            other => StackEvent::Active(other),
        }
    }
}
