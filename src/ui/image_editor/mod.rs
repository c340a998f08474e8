// SPDX-License-Identifier: MPL-2.0
//! Interactive photo editor: pan, zoom, rotate, brightness and contrast
//! over a [`RasterSurface`], producing one finished still image.
//!
//! This module follows a "state down, messages up" pattern: the host feeds
//! [`Message`]s through [`ImageTransformEditor::update`] and reacts to the
//! returned [`Event`]. The direct methods are the same operations for hosts
//! that do not need the message layer.
//!
//! One editing session runs `Idle -> Editing -> {Confirmed | Cancelled}`.
//! Every exit path stops the camera.

use crate::capture::{CameraCaptureService, StartStatus};
use crate::config::Config;
use crate::domain::editing::{AdjustmentPercent, PanOffset, TransformState, ZoomFactor};
use crate::domain::media::{EncodedImage, RawImage};
use crate::domain::ui::PointerEvent;
use crate::error::{CameraError, Result};
use crate::media::{ExportFormat, RasterSurface, SurfaceSize};
use crate::ui::state::DragState;

mod messages;
mod routing;

pub use messages::{AdjustMessage, CameraMessage, Event, Message};

/// Lifecycle of one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    /// No source loaded yet.
    #[default]
    Idle,
    Editing,
    Confirmed,
    Cancelled,
}

pub struct ImageTransformEditor {
    phase: EditorPhase,
    surface: RasterSurface,
    transform: TransformState,
    drag: DragState,
    export_format: ExportFormat,
    camera: Option<CameraCaptureService>,
    /// Last camera failure, kept for the host's file-upload notice
    camera_notice: Option<CameraError>,
}

impl std::fmt::Debug for ImageTransformEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageTransformEditor")
            .field("phase", &self.phase)
            .field("transform", &self.transform)
            .field("export_format", &self.export_format)
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

impl ImageTransformEditor {
    #[must_use]
    pub fn new(surface: RasterSurface) -> Self {
        Self {
            phase: EditorPhase::Idle,
            surface,
            transform: TransformState::default(),
            drag: DragState::default(),
            export_format: ExportFormat::default(),
            camera: None,
            camera_notice: None,
        }
    }

    /// Builds an editor with the configured canvas and output format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Surface`] for a zero-sized canvas.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut editor = Self::new(RasterSurface::from_config(&config.editor)?);
        editor.export_format = config.export_format();
        Ok(editor)
    }

    /// Attaches a camera as an alternative image source.
    #[must_use]
    pub fn with_camera(mut self, camera: CameraCaptureService) -> Self {
        self.camera = Some(camera);
        self
    }

    #[must_use]
    pub fn with_export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    // -------------------------------------------------------------------------
    // Source
    // -------------------------------------------------------------------------

    /// Loads `source` and enters [`EditorPhase::Editing`] with a fresh
    /// transform.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the bytes are not an image.
    /// The phase, transform and previous source are left untouched so the
    /// user can retry with another file.
    pub fn open(&mut self, source: &EncodedImage) -> Result<()> {
        if let Err(err) = self.surface.load(source.bytes()) {
            tracing::warn!(%err, phase = ?self.phase, "source image rejected");
            return Err(err);
        }
        self.transform.reset();
        self.drag.stop();
        self.phase = EditorPhase::Editing;
        tracing::debug!(bytes = source.len(), "editing session started");
        self.redraw();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Applies one pointer event. Drags pan the image by the pointer delta
    /// divided by the current zoom, in the order events arrive.
    pub fn pointer(&mut self, event: PointerEvent) {
        if !self.is_editing() {
            return;
        }
        match event {
            PointerEvent::Pressed(point) => self.drag.start(point),
            PointerEvent::Moved(point) => {
                if let Some((dx, dy)) = self.drag.drag_to(point) {
                    self.transform.pan_by(dx, dy);
                    self.redraw();
                }
            }
            PointerEvent::Released | PointerEvent::Left => self.drag.stop(),
        }
    }

    pub fn set_zoom(&mut self, factor: f32) {
        self.adjust(|t| t.zoom = ZoomFactor::new(factor));
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.adjust(|t| t.rotation_degrees = degrees);
    }

    pub fn set_brightness(&mut self, percent: i32) {
        self.adjust(|t| t.brightness = AdjustmentPercent::new(percent));
    }

    pub fn set_contrast(&mut self, percent: i32) {
        self.adjust(|t| t.contrast = AdjustmentPercent::new(percent));
    }

    /// Sets the pan offset directly, in pre-scale units.
    pub fn set_pan(&mut self, pan: PanOffset) {
        self.adjust(|t| t.pan = pan);
    }

    /// Restores the default transform without reloading the source.
    pub fn reset_transform(&mut self) {
        self.adjust(TransformState::reset);
    }

    /// Changes the canvas size and redraws.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.surface.render(&self.transform, size);
    }

    fn adjust(&mut self, change: impl FnOnce(&mut TransformState)) {
        if !self.is_editing() {
            tracing::debug!(phase = ?self.phase, "ignoring adjustment outside editing");
            return;
        }
        change(&mut self.transform);
        self.redraw();
    }

    fn redraw(&mut self) {
        let size = self.surface.size();
        self.surface.render(&self.transform, size);
    }

    // -------------------------------------------------------------------------
    // Terminal transitions
    // -------------------------------------------------------------------------

    /// Exports the composed canvas and enters [`EditorPhase::Confirmed`].
    ///
    /// Returns `Ok(None)` outside [`EditorPhase::Editing`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Encode`] if encoding fails; the editor
    /// stays in editing.
    pub fn confirm(&mut self) -> Result<Option<EncodedImage>> {
        if !self.is_editing() {
            tracing::debug!(phase = ?self.phase, "confirm ignored");
            return Ok(None);
        }
        let image = self.surface.export_image(self.export_format)?;
        self.phase = EditorPhase::Confirmed;
        self.teardown();
        tracing::info!(bytes = image.len(), "edited image confirmed");
        Ok(Some(image))
    }

    /// Discards the source and transform and enters
    /// [`EditorPhase::Cancelled`]. Returns false outside editing, but the
    /// camera is stopped either way.
    pub fn cancel(&mut self) -> bool {
        self.teardown();
        if !self.is_editing() {
            return false;
        }
        self.discard_source();
        self.phase = EditorPhase::Cancelled;
        tracing::debug!("editing cancelled");
        true
    }

    /// External teardown (the host is closing the editor). Safe in any phase
    /// and safe to repeat.
    pub fn close(&mut self) {
        self.teardown();
        if self.is_editing() {
            self.phase = EditorPhase::Cancelled;
        }
        self.discard_source();
    }

    fn discard_source(&mut self) {
        self.surface.unload();
        self.transform.reset();
    }

    fn teardown(&mut self) {
        self.drag.stop();
        if let Some(camera) = self.camera.as_mut() {
            camera.stop();
        }
    }

    // -------------------------------------------------------------------------
    // Camera source
    // -------------------------------------------------------------------------

    /// Opens the attached camera, stopping any previous session first.
    ///
    /// # Errors
    ///
    /// Returns the camera failure, which is also kept as
    /// [`Self::camera_notice`]. Without an attached camera this is
    /// [`CameraError::DeviceUnavailable`].
    pub fn start_camera(&mut self) -> std::result::Result<StartStatus, CameraError> {
        let result = match self.camera.as_mut() {
            Some(camera) => {
                camera.stop();
                camera.start()
            }
            None => Err(CameraError::DeviceUnavailable),
        };
        self.note_camera_result(result)
    }

    /// Resolves a pending permission prompt. `None` while still waiting.
    pub fn poll_camera(&mut self) -> Option<std::result::Result<(), CameraError>> {
        let result = self.camera.as_mut()?.poll()?;
        Some(self.note_camera_result(result))
    }

    fn note_camera_result<T>(
        &mut self,
        result: std::result::Result<T, CameraError>,
    ) -> std::result::Result<T, CameraError> {
        match &result {
            Ok(_) => self.camera_notice = None,
            Err(err) => self.camera_notice = Some(err.clone()),
        }
        result
    }

    /// Freezes the current camera frame and opens it as the source.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::NoActiveSession`] when the camera is not live,
    /// or the capture or decode failure.
    pub fn capture_from_camera(&mut self) -> Result<()> {
        let camera = self.camera.as_mut().ok_or(CameraError::NoActiveSession)?;
        let still = camera.capture_frame(ExportFormat::Png)?;
        self.open(&still)
    }

    pub fn stop_camera(&mut self) {
        if let Some(camera) = self.camera.as_mut() {
            camera.stop();
        }
    }

    #[must_use]
    pub fn is_camera_active(&self) -> bool {
        self.camera.as_ref().is_some_and(CameraCaptureService::is_active)
    }

    /// Pushes the live frame to the camera's preview sink.
    pub fn pump_camera_preview(&mut self) -> bool {
        self.camera
            .as_mut()
            .is_some_and(CameraCaptureService::pump_preview)
    }

    /// Last camera failure, cleared by the next successful start.
    #[must_use]
    pub fn camera_notice(&self) -> Option<&CameraError> {
        self.camera_notice.as_ref()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.phase == EditorPhase::Editing
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    #[must_use]
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Current canvas content for on-screen preview.
    #[must_use]
    pub fn snapshot(&self) -> RawImage {
        self.surface.snapshot()
    }

    #[must_use]
    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.export_format = format;
    }
}
