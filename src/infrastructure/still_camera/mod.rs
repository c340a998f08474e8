// SPDX-License-Identifier: MPL-2.0
//! Virtual camera serving one fixed frame.
//!
//! Implements [`CameraDevice`] for headless hosts (the CLI) and for tests.
//! The access behavior can be set to grant, deny, report no device, or hold
//! the permission prompt open until the host answers it through a
//! [`PromptHandle`].

use crate::application::port::{CameraDevice, CameraStream, PermissionResponder};
use crate::domain::media::RawImage;
use crate::error::{CameraError, Result};
use crate::media::export;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// How the virtual device answers an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessBehavior {
    /// Grant immediately.
    #[default]
    Grant,
    /// Answer with [`CameraError::PermissionDenied`].
    Deny,
    /// Answer with [`CameraError::DeviceUnavailable`].
    Absent,
    /// Leave the prompt open until [`PromptHandle`] answers it.
    Defer,
}

/// Counters shared by the device and every stream it hands out.
#[derive(Debug, Clone, Default)]
pub struct CameraProbe {
    requests: Arc<AtomicUsize>,
    granted: Arc<AtomicUsize>,
    stopped: Arc<AtomicUsize>,
}

impl CameraProbe {
    /// Number of access requests received.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Number of streams handed out.
    #[must_use]
    pub fn granted(&self) -> usize {
        self.granted.load(Ordering::SeqCst)
    }

    /// Number of streams stopped.
    #[must_use]
    pub fn stopped(&self) -> usize {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Streams handed out and not yet stopped.
    #[must_use]
    pub fn live_streams(&self) -> usize {
        self.granted().saturating_sub(self.stopped())
    }
}

struct StillStream {
    frame: RawImage,
    live: bool,
    probe: CameraProbe,
}

impl CameraStream for StillStream {
    fn current_frame(&mut self) -> std::result::Result<RawImage, CameraError> {
        if self.live {
            Ok(self.frame.clone())
        } else {
            Err(CameraError::StreamFailed("stream stopped".to_string()))
        }
    }

    fn stop(&mut self) {
        if self.live {
            self.live = false;
            self.probe.stopped.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

fn open_stream(frame: &RawImage, probe: &CameraProbe) -> Box<dyn CameraStream> {
    probe.granted.fetch_add(1, Ordering::SeqCst);
    Box::new(StillStream {
        frame: frame.clone(),
        live: true,
        probe: probe.clone(),
    })
}

type PromptSlot = Arc<Mutex<Option<PermissionResponder>>>;

/// Host-side handle answering a deferred permission prompt.
#[derive(Clone)]
pub struct PromptHandle {
    slot: PromptSlot,
    frame: RawImage,
    probe: CameraProbe,
}

impl PromptHandle {
    fn take(&self) -> Option<PermissionResponder> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Returns true while a prompt is waiting for an answer.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Grants the waiting prompt. Returns false if none was waiting.
    pub fn grant(&self) -> bool {
        match self.take() {
            Some(responder) => {
                responder.grant(open_stream(&self.frame, &self.probe));
                true
            }
            None => false,
        }
    }

    /// Denies the waiting prompt. Returns false if none was waiting.
    pub fn deny(&self, error: CameraError) -> bool {
        match self.take() {
            Some(responder) => {
                responder.deny(error);
                true
            }
            None => false,
        }
    }
}

/// A camera whose every frame is the same still image.
pub struct StillCamera {
    frame: RawImage,
    behavior: AccessBehavior,
    prompt: PromptSlot,
    probe: CameraProbe,
}

impl StillCamera {
    #[must_use]
    pub fn new(frame: RawImage) -> Self {
        Self {
            frame,
            behavior: AccessBehavior::default(),
            prompt: Arc::default(),
            probe: CameraProbe::default(),
        }
    }

    /// Uses a decoded image file as the camera frame.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the bytes are not an image.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let rgba = export::decode(bytes)?;
        let (width, height) = rgba.dimensions();
        Ok(Self::new(RawImage::new(width, height, rgba.into_raw())))
    }

    /// Diagonal gradient, handy when no image file is at hand.
    #[must_use]
    pub fn test_pattern(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for y in 0..height {
            for x in 0..width {
                // Both ratios are <= 1, so the products stay within u8
                #[allow(clippy::cast_possible_truncation)]
                let (r, g) = ((x * 255 / width) as u8, (y * 255 / height) as u8);
                rgba.extend_from_slice(&[r, g, 160, 255]);
            }
        }
        Self::new(RawImage::new(width, height, rgba))
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: AccessBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Shared counters; keep a clone before boxing the device.
    #[must_use]
    pub fn probe(&self) -> CameraProbe {
        self.probe.clone()
    }

    /// Handle for answering deferred prompts; keep a clone before boxing.
    #[must_use]
    pub fn prompt_handle(&self) -> PromptHandle {
        PromptHandle {
            slot: Arc::clone(&self.prompt),
            frame: self.frame.clone(),
            probe: self.probe.clone(),
        }
    }
}

impl CameraDevice for StillCamera {
    fn request_access(&mut self, responder: PermissionResponder) {
        self.probe.requests.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            AccessBehavior::Grant => responder.grant(open_stream(&self.frame, &self.probe)),
            AccessBehavior::Deny => responder.deny(CameraError::PermissionDenied),
            AccessBehavior::Absent => responder.deny(CameraError::DeviceUnavailable),
            AccessBehavior::Defer => {
                // A newer prompt replaces an unanswered older one; dropping the
                // old responder tells its requester the device went away.
                *self.prompt.lock().unwrap_or_else(PoisonError::into_inner) = Some(responder);
            }
        }
    }
}
