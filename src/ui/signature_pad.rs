// SPDX-License-Identifier: MPL-2.0
//! Freehand signature capture.
//!
//! Strokes are recorded as vector paths in a [`SignatureDrawing`] and drawn
//! onto a live canvas one segment at a time as they arrive. Export
//! re-rasterizes the whole drawing onto a fresh background, so the exported
//! image never depends on the live canvas.

use crate::config::SignatureConfig;
use crate::domain::media::{EncodedImage, RawImage};
use crate::domain::signing::{SignatureDrawing, StrokePath};
use crate::domain::ui::{Point, PointerEvent};
use crate::error::{Error, Result};
use crate::media::{export, pixmap, ExportFormat, SurfaceSize};
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Ink appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InkStyle {
    color: Color,
    width: f32,
}

impl InkStyle {
    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.anti_alias = true;
        paint
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            width: self.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
    }

    /// Strokes the polyline through `points`. Fewer than two points draw nothing.
    fn draw(&self, target: &mut Pixmap, points: &[Point]) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        if let Some(path) = builder.finish() {
            target.stroke_path(
                &path,
                &self.paint(),
                &self.stroke(),
                Transform::identity(),
                None,
            );
        }
    }
}

pub struct SignaturePad {
    drawing: SignatureDrawing,
    canvas: Pixmap,
    background: Color,
    ink: InkStyle,
}

impl std::fmt::Debug for SignaturePad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignaturePad")
            .field("size", &self.size())
            .field("strokes", &self.stroke_count())
            .field("has_ink", &self.has_ink())
            .finish_non_exhaustive()
    }
}

impl SignaturePad {
    /// Creates a blank pad.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Surface`] for a zero-sized pad.
    pub fn from_config(config: &SignatureConfig) -> Result<Self> {
        let background = pixmap::color(config.background);
        let canvas = blank(
            SurfaceSize::new(config.width, config.height),
            background,
        )?;
        Ok(Self {
            drawing: SignatureDrawing::default(),
            canvas,
            background,
            ink: InkStyle {
                color: pixmap::color(config.ink),
                width: config.stroke_width,
            },
        })
    }

    /// Routes one unified pointer event. Leaving the pad ends the stroke.
    pub fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed(point) => self.begin_stroke(point),
            PointerEvent::Moved(point) => self.extend_stroke(point),
            PointerEvent::Released | PointerEvent::Left => self.end_stroke(),
        }
    }

    /// Starts a new stroke. Counts as ink immediately, even if the pointer
    /// never moves.
    pub fn begin_stroke(&mut self, point: Point) {
        self.drawing.begin_stroke(point);
    }

    /// Adds a point to the open stroke and draws the new segment. Ignored
    /// when no stroke is open.
    pub fn extend_stroke(&mut self, point: Point) {
        if !self.drawing.extend_stroke(point) {
            return;
        }
        if let Some((from, to)) = self
            .drawing
            .open_stroke()
            .and_then(StrokePath::last_segment)
        {
            self.ink.draw(&mut self.canvas, &[from, to]);
        }
    }

    pub fn end_stroke(&mut self) {
        self.drawing.end_stroke();
    }

    /// Discards every stroke and blanks the canvas.
    pub fn clear(&mut self) {
        self.drawing.clear();
        self.canvas.fill(self.background);
        tracing::debug!("signature cleared");
    }

    #[must_use]
    pub fn has_ink(&self) -> bool {
        self.drawing.has_ink()
    }

    /// Rasterizes all recorded strokes onto a blank background.
    ///
    /// Works without ink too; the result is then a blank image, so callers
    /// gate on [`Self::has_ink`] rather than inspecting pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if encoding fails.
    pub fn export_raster(&self, format: ExportFormat) -> Result<EncodedImage> {
        let target = self.render_strokes()?;
        export::encode_rgba(
            target.width(),
            target.height(),
            pixmap::to_rgba_bytes(&target),
            format,
        )
    }

    fn render_strokes(&self) -> Result<Pixmap> {
        let mut target = blank(self.size(), self.background)?;
        for stroke in self.drawing.strokes() {
            self.ink.draw(&mut target, stroke.points());
        }
        Ok(target)
    }

    /// Live canvas for on-screen display.
    #[must_use]
    pub fn snapshot(&self) -> RawImage {
        pixmap::to_raw_image(&self.canvas)
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        pixmap::pixel_at(&self.canvas, x, y)
    }

    #[must_use]
    pub fn drawing(&self) -> &SignatureDrawing {
        &self.drawing
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.drawing.strokes().len()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.drawing.point_count()
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }
}

fn blank(size: SurfaceSize, background: Color) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(size.width, size.height).ok_or_else(|| {
        Error::Surface(format!(
            "invalid signature pad size {}x{}",
            size.width, size.height
        ))
    })?;
    pixmap.fill(background);
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_INK_COLOR, DEFAULT_SIGNATURE_BACKGROUND};

    fn pad() -> SignaturePad {
        SignaturePad::from_config(&SignatureConfig {
            width: 120,
            height: 60,
            stroke_width: 4.0,
            ..SignatureConfig::default()
        })
        .expect("pad")
    }

    fn draw(pad: &mut SignaturePad, points: &[(f32, f32)]) {
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            pad.pointer(PointerEvent::Pressed(Point::new(x, y)));
        }
        for &(x, y) in iter {
            pad.pointer(PointerEvent::Moved(Point::new(x, y)));
        }
        pad.pointer(PointerEvent::Released);
    }

    fn decoded(image: &EncodedImage) -> image_rs::RgbaImage {
        export::decode(image.bytes()).expect("decode export")
    }

    fn is_blank(image: &image_rs::RgbaImage) -> bool {
        image.pixels().all(|p| p.0 == DEFAULT_SIGNATURE_BACKGROUND)
    }

    #[test]
    fn new_pad_is_blank() {
        let pad = pad();
        assert!(!pad.has_ink());
        assert_eq!(pad.stroke_count(), 0);
        assert_eq!(pad.pixel(60, 30), Some(DEFAULT_SIGNATURE_BACKGROUND));
        assert!(is_blank(&decoded(&pad.export_raster(ExportFormat::Png).expect("export"))));
    }

    #[test]
    fn zero_sized_pad_is_rejected() {
        let config = SignatureConfig {
            height: 0,
            ..SignatureConfig::default()
        };
        assert!(matches!(
            SignaturePad::from_config(&config),
            Err(Error::Surface(_))
        ));
    }

    #[test]
    fn stroke_is_drawn_live_and_exported() {
        let mut pad = pad();
        draw(&mut pad, &[(10.0, 30.0), (60.0, 30.0), (110.0, 30.0)]);

        assert!(pad.has_ink());
        assert_eq!(pad.stroke_count(), 1);
        assert_eq!(pad.point_count(), 3);
        assert_eq!(pad.pixel(60, 30), Some(DEFAULT_INK_COLOR));

        let exported = decoded(&pad.export_raster(ExportFormat::Png).expect("export"));
        assert_eq!(exported.dimensions(), (120, 60));
        assert_eq!(exported.get_pixel(35, 30).0, DEFAULT_INK_COLOR);
        assert_eq!(exported.get_pixel(60, 5).0, DEFAULT_SIGNATURE_BACKGROUND);
    }

    #[test]
    fn clear_then_export_is_blank() {
        let mut pad = pad();
        draw(&mut pad, &[(5.0, 5.0), (100.0, 50.0)]);
        draw(&mut pad, &[(5.0, 50.0), (100.0, 5.0)]);
        pad.clear();

        assert!(!pad.has_ink());
        assert_eq!(pad.stroke_count(), 0);
        assert_eq!(pad.pixel(52, 27), Some(DEFAULT_SIGNATURE_BACKGROUND));
        assert!(is_blank(&decoded(&pad.export_raster(ExportFormat::Png).expect("export"))));
    }

    #[test]
    fn single_tap_counts_as_ink_but_leaves_no_mark() {
        let mut pad = pad();
        draw(&mut pad, &[(60.0, 30.0)]);

        assert!(pad.has_ink());
        assert_eq!(pad.point_count(), 1);
        assert!(is_blank(&decoded(&pad.export_raster(ExportFormat::Png).expect("export"))));
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut pad = pad();
        pad.pointer(PointerEvent::Moved(Point::new(10.0, 10.0)));
        pad.pointer(PointerEvent::Moved(Point::new(50.0, 50.0)));
        assert!(!pad.has_ink());
        assert_eq!(pad.point_count(), 0);
    }

    #[test]
    fn leaving_the_pad_ends_the_stroke() {
        let mut pad = pad();
        pad.pointer(PointerEvent::Pressed(Point::new(10.0, 10.0)));
        pad.pointer(PointerEvent::Moved(Point::new(20.0, 10.0)));
        pad.pointer(PointerEvent::Left);
        // re-entering with the button still down does not resume the stroke
        pad.pointer(PointerEvent::Moved(Point::new(30.0, 10.0)));

        assert_eq!(pad.stroke_count(), 1);
        assert_eq!(pad.point_count(), 2);
        assert!(!pad.drawing().is_stroke_open());
    }

    #[test]
    fn export_does_not_touch_the_live_canvas() {
        let mut pad = pad();
        draw(&mut pad, &[(10.0, 10.0), (110.0, 50.0)]);
        let before = pad.snapshot();
        let _ = pad.export_raster(ExportFormat::Png).expect("export");
        assert_eq!(pad.snapshot(), before);
    }
}
