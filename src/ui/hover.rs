// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer hover tracking over the progress bar.

use crate::util::geometry::pointer_percentage;

/// Hover position meaning "the pointer is not over the bar".
pub const HOVER_INACTIVE: f64 = -1.0;

/// Last known horizontal pointer position over the bar, as a percentage.
///
/// The position is stored as computed. A fast move can report a pointer
/// slightly outside the bar, so readers must accept values outside
/// [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTracker {
    position: f64,
}

impl Default for HoverTracker {
    fn default() -> Self {
        Self {
            position: HOVER_INACTIVE,
        }
    }
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move over a bar spanning `bar_left..bar_left + bar_width`.
    pub fn pointer_moved(&mut self, pointer_x: f32, bar_left: f32, bar_width: f32) {
        let position = pointer_percentage(pointer_x, bar_left, bar_width);
        self.position = if position.is_finite() {
            position
        } else {
            HOVER_INACTIVE
        };
    }

    /// The pointer left the bar.
    pub fn pointer_left(&mut self) {
        self.position = HOVER_INACTIVE;
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.position >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        let hover = HoverTracker::new();
        assert_eq!(hover.position(), HOVER_INACTIVE);
        assert!(!hover.is_active());
    }

    #[test]
    fn test_move_then_leave() {
        let mut hover = HoverTracker::new();
        hover.pointer_moved(150.0, 50.0, 400.0);
        assert_eq!(hover.position(), 25.0);
        assert!(hover.is_active());

        hover.pointer_left();
        assert_eq!(hover.position(), HOVER_INACTIVE);
        assert!(!hover.is_active());
    }

    #[test]
    fn test_latest_move_wins() {
        let mut hover = HoverTracker::new();
        hover.pointer_moved(100.0, 0.0, 200.0);
        hover.pointer_moved(20.0, 0.0, 200.0);
        assert_eq!(hover.position(), 10.0);
    }

    #[test]
    fn test_position_outside_bar_is_kept() {
        let mut hover = HoverTracker::new();
        hover.pointer_moved(250.0, 0.0, 200.0);
        assert!((hover.position() - 125.0).abs() < 1e-9);
        assert!(hover.is_active());

        hover.pointer_moved(-50.0, 0.0, 200.0);
        assert!((hover.position() + 25.0).abs() < 1e-9);
        assert!(!hover.is_active());
    }

    #[test]
    fn test_zero_width_bar_is_inactive() {
        let mut hover = HoverTracker::new();
        hover.pointer_moved(10.0, 10.0, 0.0);
        assert!(!hover.is_active());
    }
}
