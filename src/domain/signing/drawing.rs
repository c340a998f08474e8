// SPDX-License-Identifier: MPL-2.0
//! Vector record of a freehand signature.

use crate::domain::ui::Point;

/// One continuous pointer-down-to-pointer-up gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokePath {
    points: Vec<Point>,
}

impl StrokePath {
    #[must_use]
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// A stroke needs two points to leave a visible mark.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2
    }

    /// Last segment, if the stroke has one.
    #[must_use]
    pub fn last_segment(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    fn push(&mut self, point: Point) {
        self.points.push(point);
    }
}

/// Ordered strokes plus the derived `has_ink` flag.
///
/// `has_ink` becomes true as soon as any stroke is begun, including a single
/// tap that never moves. Only [`SignatureDrawing::clear`] resets it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureDrawing {
    strokes: Vec<StrokePath>,
    stroke_open: bool,
    has_ink: bool,
}

impl SignatureDrawing {
    /// Starts a new stroke at `point`, closing any stroke left open.
    pub fn begin_stroke(&mut self, point: Point) {
        self.strokes.push(StrokePath::starting_at(point));
        self.stroke_open = true;
        self.has_ink = true;
    }

    /// Appends `point` to the open stroke. Returns false (and records nothing)
    /// when no stroke is open.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        if !self.stroke_open {
            return false;
        }
        match self.strokes.last_mut() {
            Some(stroke) => {
                stroke.push(point);
                true
            }
            None => false,
        }
    }

    /// Closes the open stroke; no-op when none is open.
    pub fn end_stroke(&mut self) {
        self.stroke_open = false;
    }

    /// Discards every stroke and resets `has_ink`.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.stroke_open = false;
        self.has_ink = false;
    }

    #[must_use]
    pub fn has_ink(&self) -> bool {
        self.has_ink
    }

    #[must_use]
    pub fn is_stroke_open(&self) -> bool {
        self.stroke_open
    }

    #[must_use]
    pub fn strokes(&self) -> &[StrokePath] {
        &self.strokes
    }

    /// The stroke currently receiving points.
    #[must_use]
    pub fn open_stroke(&self) -> Option<&StrokePath> {
        if self.stroke_open {
            self.strokes.last()
        } else {
            None
        }
    }

    /// Total number of recorded points across all strokes.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn new_drawing_has_no_ink() {
        let drawing = SignatureDrawing::default();
        assert!(!drawing.has_ink());
        assert!(drawing.strokes().is_empty());
        assert!(!drawing.is_stroke_open());
    }

    #[test]
    fn begin_sets_ink_and_opens_stroke() {
        let mut drawing = SignatureDrawing::default();
        drawing.begin_stroke(p(1.0, 1.0));
        assert!(drawing.has_ink());
        assert!(drawing.is_stroke_open());
        assert_eq!(drawing.strokes().len(), 1);
    }

    #[test]
    fn extend_without_open_stroke_is_ignored() {
        let mut drawing = SignatureDrawing::default();
        assert!(!drawing.extend_stroke(p(3.0, 3.0)));
        assert!(!drawing.has_ink());
        assert_eq!(drawing.point_count(), 0);

        drawing.begin_stroke(p(0.0, 0.0));
        drawing.end_stroke();
        assert!(!drawing.extend_stroke(p(5.0, 5.0)));
        assert_eq!(drawing.point_count(), 1);
    }

    #[test]
    fn points_are_kept_in_order() {
        let mut drawing = SignatureDrawing::default();
        drawing.begin_stroke(p(0.0, 0.0));
        drawing.extend_stroke(p(1.0, 2.0));
        drawing.extend_stroke(p(3.0, 4.0));
        drawing.end_stroke();

        assert_eq!(
            drawing.strokes()[0].points(),
            &[p(0.0, 0.0), p(1.0, 2.0), p(3.0, 4.0)]
        );
        assert_eq!(
            drawing.strokes()[0].last_segment(),
            Some((p(1.0, 2.0), p(3.0, 4.0)))
        );
    }

    #[test]
    fn single_tap_counts_as_ink_but_is_invisible() {
        let mut drawing = SignatureDrawing::default();
        drawing.begin_stroke(p(7.0, 7.0));
        drawing.end_stroke();
        assert!(drawing.has_ink());
        assert!(!drawing.strokes()[0].is_visible());
        assert!(drawing.strokes()[0].last_segment().is_none());
    }

    #[test]
    fn end_stroke_is_idempotent_and_keeps_ink() {
        let mut drawing = SignatureDrawing::default();
        drawing.end_stroke();
        drawing.begin_stroke(p(0.0, 0.0));
        drawing.end_stroke();
        drawing.end_stroke();
        assert!(drawing.has_ink());
        assert!(drawing.open_stroke().is_none());
    }

    #[test]
    fn clear_discards_everything() {
        let mut drawing = SignatureDrawing::default();
        drawing.begin_stroke(p(0.0, 0.0));
        drawing.extend_stroke(p(1.0, 1.0));
        drawing.clear();
        assert!(!drawing.has_ink());
        assert!(drawing.strokes().is_empty());
        assert!(!drawing.extend_stroke(p(2.0, 2.0)));
    }
}
