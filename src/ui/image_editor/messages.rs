// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::domain::media::EncodedImage;
use crate::domain::ui::PointerEvent;
use crate::error::CameraError;
use crate::media::SurfaceSize;

/// Slider-equivalent parameter inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdjustMessage {
    ZoomChanged(f32),
    RotationChanged(f32),
    /// Brightness slider changed (live preview)
    BrightnessChanged(i32),
    /// Contrast slider changed (live preview)
    ContrastChanged(i32),
    /// Restore every parameter to its default
    Reset,
}

/// Camera source messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMessage {
    Start,
    /// Host tick while a permission prompt may be open
    Poll,
    Capture,
    Stop,
}

/// Messages emitted directly by the editor controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// Source image picked by the user (file upload path)
    Open(EncodedImage),
    Pointer(PointerEvent),
    Adjust(AdjustMessage),
    Camera(CameraMessage),
    /// Host surface was resized
    Resized(SurfaceSize),
    Confirm,
    Cancel,
}

impl From<PointerEvent> for Message {
    fn from(event: PointerEvent) -> Self {
        Message::Pointer(event)
    }
}

impl From<AdjustMessage> for Message {
    fn from(message: AdjustMessage) -> Self {
        Message::Adjust(message)
    }
}

impl From<CameraMessage> for Message {
    fn from(message: CameraMessage) -> Self {
        Message::Camera(message)
    }
}

/// Events propagated to the parent for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The finished image, delivered once per editing session
    Confirmed(EncodedImage),
    /// Editing was abandoned; nothing is delivered
    Cancelled,
    /// The picked source could not be decoded; the user may retry
    LoadFailed(String),
    /// Camera could not be used; the host shows a neutral notice and
    /// offers file upload instead
    CameraNotice(CameraError),
    /// Encoding the result failed; the session stays in editing
    ExportFailed(String),
}
