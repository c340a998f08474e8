// SPDX-License-Identifier: MPL-2.0
//! Camera capture service.
//!
//! Owns at most one camera session at a time: the pending permission
//! request, the live stream once granted, and the preview sink that frames
//! are pushed to. Every teardown path goes through [`CameraCaptureService::stop`],
//! which is idempotent.

use crate::application::port::camera::PermissionReceiver;
use crate::application::port::{CameraDevice, CameraStream, PermissionResponder, PreviewSink};
use crate::domain::media::EncodedImage;
use crate::error::{CameraError, Result};
use crate::media::export::{self, ExportFormat};
use tokio::sync::oneshot::error::TryRecvError;

/// Result of a successful [`CameraCaptureService::start`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStatus {
    /// The stream is live.
    Active,
    /// The permission prompt is still open; call
    /// [`CameraCaptureService::poll`] from the event loop.
    Pending,
}

pub struct CameraCaptureService {
    device: Box<dyn CameraDevice>,
    pending: Option<PermissionReceiver>,
    stream: Option<Box<dyn CameraStream>>,
    preview: Option<Box<dyn PreviewSink>>,
}

impl std::fmt::Debug for CameraCaptureService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCaptureService")
            .field("pending", &self.is_pending())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl CameraCaptureService {
    #[must_use]
    pub fn new(device: Box<dyn CameraDevice>) -> Self {
        Self {
            device,
            pending: None,
            stream: None,
            preview: None,
        }
    }

    /// Binds the sink that live frames are pushed to.
    pub fn set_preview_sink(&mut self, sink: Box<dyn PreviewSink>) {
        self.preview = Some(sink);
    }

    /// Requests camera access.
    ///
    /// Any existing session (live or still waiting on its prompt) is stopped
    /// first. Devices that answer synchronously yield
    /// [`StartStatus::Active`] or an error right away; otherwise the session
    /// is [`StartStatus::Pending`] and stays inactive until [`Self::poll`]
    /// sees the answer.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::PermissionDenied`] or
    /// [`CameraError::DeviceUnavailable`]; the session is left inactive.
    pub fn start(&mut self) -> std::result::Result<StartStatus, CameraError> {
        if self.is_active() || self.is_pending() {
            tracing::warn!("camera start requested while a session exists; stopping it first");
            self.stop();
        }

        let (responder, receiver) = PermissionResponder::channel();
        self.pending = Some(receiver);
        self.device.request_access(responder);

        match self.poll() {
            Some(Ok(())) => Ok(StartStatus::Active),
            Some(Err(err)) => Err(err),
            None => {
                tracing::debug!("camera permission prompt pending");
                Ok(StartStatus::Pending)
            }
        }
    }

    /// Checks whether a pending permission prompt has been answered.
    ///
    /// Returns `None` while nothing is pending or the answer has not arrived.
    pub fn poll(&mut self) -> Option<std::result::Result<(), CameraError>> {
        let receiver = self.pending.as_mut()?;
        let answer = match receiver.try_recv() {
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(CameraError::DeviceUnavailable),
            Ok(answer) => answer,
        };
        self.pending = None;

        match answer {
            Ok(stream) => {
                tracing::info!("camera session started");
                self.stream = Some(stream);
                self.pump_preview();
                Some(Ok(()))
            }
            Err(err) => {
                tracing::warn!(%err, "camera unavailable, falling back to file upload");
                Some(Err(err))
            }
        }
    }

    /// Pushes the current frame to the preview sink.
    ///
    /// Returns true if a frame was presented.
    pub fn pump_preview(&mut self) -> bool {
        let (Some(stream), Some(sink)) = (self.stream.as_mut(), self.preview.as_mut()) else {
            return false;
        };
        match stream.current_frame() {
            Ok(frame) => {
                sink.present(&frame);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "no preview frame");
                false
            }
        }
    }

    /// Freezes the displayed frame into an encoded still and releases the camera.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::NoActiveSession`] when no stream is live, a
    /// stream error if the device stopped delivering, or an encode error.
    /// The session stays active on stream or encode failure.
    pub fn capture_frame(&mut self, format: ExportFormat) -> Result<EncodedImage> {
        let stream = self.stream.as_mut().ok_or(CameraError::NoActiveSession)?;
        let frame = stream.current_frame()?;
        let encoded = export::encode_rgba(
            frame.width(),
            frame.height(),
            frame.pixels().to_vec(),
            format,
        )?;
        tracing::info!(
            width = frame.width(),
            height = frame.height(),
            "camera frame captured"
        );
        self.stop();
        Ok(encoded)
    }

    /// Releases every device resource and marks the session inactive.
    ///
    /// Safe to call at any time, any number of times. A prompt still open is
    /// abandoned; if it is granted later the responder stops that stream.
    pub fn stop(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("abandoned pending camera prompt");
        }
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            tracing::info!("camera session stopped");
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for CameraCaptureService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests;
