// SPDX-License-Identifier: MPL-2.0
//! Camera device port definition.
//!
//! This module defines the [`CameraDevice`] and [`CameraStream`] traits.
//! Platform adapters implement them; the capture service only sees these.
//!
//! # Design Notes
//!
//! - Opening a camera involves a permission prompt whose answer arrives
//!   later. The device receives a [`PermissionResponder`] and resolves it
//!   whenever the answer is known, possibly from inside `request_access`.
//! - Methods are not `async`: the host event loop polls the capture service.
//! - A stream that arrives after the requester lost interest is stopped by
//!   the responder itself, so late answers never leak a live device.

use crate::domain::media::RawImage;
use crate::error::CameraError;
use tokio::sync::oneshot;

// =============================================================================
// CameraStream Trait
// =============================================================================

/// A live video stream holding the device.
pub trait CameraStream: Send {
    /// Returns the frame currently being displayed.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::StreamFailed`] if the device stopped delivering.
    fn current_frame(&mut self) -> Result<RawImage, CameraError>;

    /// Stops every underlying device track. Must be idempotent.
    fn stop(&mut self);

    /// Returns false once [`CameraStream::stop`] has run.
    fn is_live(&self) -> bool;
}

// =============================================================================
// PreviewSink Trait
// =============================================================================

/// Receives live frames while a session is active.
pub trait PreviewSink: Send {
    fn present(&mut self, frame: &RawImage);
}

// =============================================================================
// Permission resolution
// =============================================================================

/// Outcome of one access request.
pub type AccessResult = Result<Box<dyn CameraStream>, CameraError>;

/// One-shot handle through which a device answers an access request.
#[derive(Debug)]
pub struct PermissionResponder {
    tx: oneshot::Sender<AccessResult>,
}

/// Receiving half kept by the capture service.
pub(crate) type PermissionReceiver = oneshot::Receiver<AccessResult>;

impl PermissionResponder {
    pub(crate) fn channel() -> (Self, PermissionReceiver) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Delivers the answer. If nobody is waiting any more, a granted stream
    /// is stopped on the spot.
    pub fn resolve(self, result: AccessResult) {
        if let Err(Ok(mut stream)) = self.tx.send(result) {
            tracing::warn!("camera stream arrived after the request was abandoned; stopping it");
            stream.stop();
        }
    }

    /// Shorthand for `resolve(Ok(stream))`.
    pub fn grant(self, stream: Box<dyn CameraStream>) {
        self.resolve(Ok(stream));
    }

    /// Shorthand for `resolve(Err(error))`.
    pub fn deny(self, error: CameraError) {
        self.resolve(Err(error));
    }

    /// Returns true if the requester has gone away.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for dyn CameraStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStream")
            .field("live", &self.is_live())
            .finish()
    }
}

// =============================================================================
// CameraDevice Trait
// =============================================================================

/// Port for camera access.
///
/// # Lifecycle
///
/// 1. The capture service calls `request_access` with a fresh responder
/// 2. The device shows its permission prompt (or not) and eventually calls
///    [`PermissionResponder::grant`] or [`PermissionResponder::deny`]
/// 3. The granted stream is owned by the capture service until it stops it
///
/// Dropping the responder without answering counts as
/// [`CameraError::DeviceUnavailable`].
pub trait CameraDevice: Send {
    fn request_access(&mut self, responder: PermissionResponder);
}
