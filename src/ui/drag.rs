// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Press-move-release scrub gesture.
//!
//! The controller turns pointer positions into a drag percentage and hands
//! back the final position exactly once when the gesture ends.

use crate::util::geometry::pointer_percentage;

/// Drag state for the seek bar.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragController {
    dragging: bool,
    drag_percentage: f64,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a drag at `pointer_x`.
    pub fn press(&mut self, pointer_x: f32, bar_left: f32, bar_width: f32) {
        self.dragging = true;
        self.drag_percentage = clamped_percentage(pointer_x, bar_left, bar_width);
        log::debug!("Drag started at {:.1}%", self.drag_percentage);
    }

    /// Follow the pointer while pressed. Does nothing when not dragging.
    pub fn motion(&mut self, pointer_x: f32, bar_left: f32, bar_width: f32) {
        if self.dragging {
            self.drag_percentage = clamped_percentage(pointer_x, bar_left, bar_width);
        }
    }

    /// End the drag.
    ///
    /// Returns the committed position as a fraction in [0, 1], or `None`
    /// if no drag was in progress.
    pub fn release(&mut self) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        log::debug!("Drag released at {:.1}%", self.drag_percentage);
        Some(self.drag_percentage / 100.0)
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_percentage(&self) -> f64 {
        self.drag_percentage
    }
}

fn clamped_percentage(pointer_x: f32, bar_left: f32, bar_width: f32) -> f64 {
    let percentage = pointer_percentage(pointer_x, bar_left, bar_width);
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}
