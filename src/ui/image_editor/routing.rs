// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.

use crate::ui::image_editor::{AdjustMessage, CameraMessage, Event, ImageTransformEditor, Message};

impl ImageTransformEditor {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Open(source) => match self.open(&source) {
                Ok(()) => Event::None,
                Err(err) => Event::LoadFailed(err.to_string()),
            },
            Message::Pointer(event) => {
                self.pointer(event);
                Event::None
            }
            Message::Adjust(msg) => {
                self.handle_adjust_message(msg);
                Event::None
            }
            Message::Camera(msg) => self.handle_camera_message(msg),
            Message::Resized(size) => {
                self.resize(size);
                Event::None
            }
            Message::Confirm => match self.confirm() {
                Ok(Some(image)) => Event::Confirmed(image),
                Ok(None) => Event::None,
                Err(err) => Event::ExportFailed(err.to_string()),
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

    fn handle_adjust_message(&mut self, message: AdjustMessage) {
        match message {
            AdjustMessage::ZoomChanged(factor) => self.set_zoom(factor),
            AdjustMessage::RotationChanged(degrees) => self.set_rotation(degrees),
            AdjustMessage::BrightnessChanged(percent) => self.set_brightness(percent),
            AdjustMessage::ContrastChanged(percent) => self.set_contrast(percent),
            AdjustMessage::Reset => self.reset_transform(),
        }
    }

    fn handle_camera_message(&mut self, message: CameraMessage) -> Event {
        match message {
            CameraMessage::Start => match self.start_camera() {
                Ok(_) => Event::None,
                Err(err) => Event::CameraNotice(err),
            },
            CameraMessage::Poll => match self.poll_camera() {
                Some(Err(err)) => Event::CameraNotice(err),
                Some(Ok(())) | None => {
                    self.pump_camera_preview();
                    Event::None
                }
            },
            CameraMessage::Capture => match self.capture_from_camera() {
                Ok(()) => Event::None,
                Err(crate::error::Error::Camera(err)) => Event::CameraNotice(err),
                Err(err) => Event::LoadFailed(err.to_string()),
            },
            CameraMessage::Stop => {
                self.stop_camera();
                Event::None
            }
        }
    }
}
