// SPDX-License-Identifier: MPL-2.0
//! Device-agnostic pointer input.
//!
//! Mouse drags and touch drags are both reduced to this event stream, so the
//! editor and the signature pad never see framework-specific events.

/// A position in surface pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `self - origin` as a `(dx, dy)` pair.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// One event of the unified pointer stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Mouse button or finger went down.
    Pressed(Point),
    /// Pointer moved, whether or not it is down.
    Moved(Point),
    /// Mouse button or finger went up.
    Released,
    /// Pointer left the surface; treated like a release.
    Left,
}
