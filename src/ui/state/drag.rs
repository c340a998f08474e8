// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks one press-move-release gesture and turns each move into a delta
//! from the previous pointer position.

use crate::domain::ui::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Last pointer position seen while the button is held
    last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation at `position`
    pub fn start(&mut self, position: Point) {
        self.last_position = Some(position);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.last_position = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_position.is_some()
    }

    /// Moves the drag to `position` and returns how far the pointer traveled
    /// since the previous call, or `None` when no drag is active.
    pub fn drag_to(&mut self, position: Point) -> Option<(f32, f32)> {
        let last = self.last_position?;
        self.last_position = Some(position);
        Some(position.delta_from(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
    }

    #[test]
    fn drag_to_returns_none_when_not_dragging() {
        let mut state = DragState::default();
        assert!(state.drag_to(Point::new(100.0, 50.0)).is_none());
        assert!(!state.is_dragging());
    }

    #[test]
    fn hovering_never_starts_a_drag() {
        let mut state = DragState::default();
        assert_eq!(state.drag_to(Point::new(100.0, 50.0)), None);
        assert_eq!(state.drag_to(Point::new(130.0, 60.0)), None);
        assert!(!state.is_dragging());

        // the first press is the origin, not the last hover position
        state.start(Point::new(10.0, 10.0));
        assert_eq!(state.drag_to(Point::new(12.0, 15.0)), Some((2.0, 5.0)));
    }

    #[test]
    fn deltas_are_relative_to_previous_move() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0));

        assert_eq!(state.drag_to(Point::new(180.0, 130.0)), Some((-20.0, -20.0)));
        assert_eq!(state.drag_to(Point::new(185.0, 140.0)), Some((5.0, 10.0)));
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0));
        state.stop();

        assert!(!state.is_dragging());
        assert!(state.drag_to(Point::new(0.0, 0.0)).is_none());
    }
}
