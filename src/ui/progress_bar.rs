// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video progress and seek bar.
//!
//! Composes the hover tracker, the drag controller and the thumbnail
//! preview. Every frame the bar:
//!
//! 1. turns this frame's pointer input into [`BarEvent`]s,
//! 2. applies them (a release commits a seek through the store),
//! 3. publishes `is_seeking` and `dragging_time` to the store,
//! 4. paints the buffered fill, the watched fill, the drag handle and the
//!    hover thumbnail from a [`BarLayout`].
//!
//! While a drag is in progress the watched fill follows the drag position
//! instead of the play head, and `is_seeking` stays true until release.

use super::drag::DragController;
use super::hover::HoverTracker;
use super::thumbnail::{thumbnail_timestamp, ThumbnailPreview};
use crate::config::BarConfig;
use crate::models::{progress::PlaybackProgress, store::PlayerStore};
use crate::util::geometry::clamp_unit;

/// Height of the interactive area around the track.
const HIT_HEIGHT: f32 = 32.0;

const TRACK_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(64, 64, 64, 64);
const BUFFERED_COLOR: egui::Color32 = egui::Color32::from_rgba_premultiplied(110, 110, 110, 128);
const WATCHED_COLOR: egui::Color32 = egui::Color32::from_rgb(165, 110, 240);

/// Pointer input relevant to the bar, in screen x coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarEvent {
    /// Pointer moved while over the bar.
    HoverMoved(f32),
    /// Pointer is no longer over the bar.
    HoverLeft,
    /// Primary button or touch went down on the bar.
    Pressed(f32),
    /// Pointer moved anywhere while the button is held.
    DragMoved(f32),
    /// Primary button or touch was released.
    Released,
}

/// Everything needed to paint one frame of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Buffered fill width as a fraction of the track.
    pub buffered: f64,
    /// Watched (or dragged) fill width as a fraction of the track.
    pub watched: f64,
    /// Hover percentage the thumbnail is anchored at, when hovering.
    pub preview_anchor: Option<f64>,
    /// Media second whose thumbnail is previewed, taken from the last
    /// drag position. The hover position only places the overlay.
    pub preview_timestamp: i64,
    /// Draw the drag handle at full size.
    pub show_handle: bool,
    /// Draw the thicker track.
    pub expanded: bool,
}

impl BarLayout {
    pub fn compute(
        progress: PlaybackProgress,
        drag: &DragController,
        hover: &HoverTracker,
        is_seeking: bool,
    ) -> Self {
        let watched = if drag.dragging() {
            clamp_unit(drag.drag_percentage() / 100.0)
        } else {
            progress.watched_ratio()
        };

        Self {
            buffered: progress.buffered_ratio(),
            watched,
            preview_anchor: hover.is_active().then(|| hover.position()),
            preview_timestamp: thumbnail_timestamp(drag.drag_percentage(), progress.duration),
            show_handle: hover.is_active() || is_seeking,
            expanded: hover.is_active() || drag.dragging(),
        }
    }
}

/// The seek bar widget. Keep one instance alive across frames.
pub struct ProgressBar {
    style: BarConfig,
    hover: HoverTracker,
    drag: DragController,
    preview: ThumbnailPreview,
}

impl ProgressBar {
    pub fn new(style: BarConfig) -> Self {
        Self {
            style,
            hover: HoverTracker::new(),
            drag: DragController::new(),
            preview: ThumbnailPreview::new(),
        }
    }

    /// Apply one pointer event for a bar spanning `bar_left..bar_left + bar_width`.
    pub fn apply(&mut self, event: BarEvent, bar_left: f32, bar_width: f32, store: &mut PlayerStore) {
        match event {
            BarEvent::HoverMoved(x) => self.hover.pointer_moved(x, bar_left, bar_width),
            BarEvent::HoverLeft => self.hover.pointer_left(),
            BarEvent::Pressed(x) => self.drag.press(x, bar_left, bar_width),
            BarEvent::DragMoved(x) => self.drag.motion(x, bar_left, bar_width),
            BarEvent::Released => {
                if let Some(fraction) = self.drag.release() {
                    store.seek(fraction * store.progress().duration);
                }
            }
        }
    }

    /// Write the drag-derived state other widgets read during a scrub.
    pub fn publish(&self, store: &mut PlayerStore) {
        store.set_seeking(self.drag.dragging());
        let dragging_time = store.progress().time_at_percentage(self.drag.drag_percentage());
        store.set_dragging_time(dragging_time);
    }

    pub fn layout(&self, store: &PlayerStore) -> BarLayout {
        BarLayout::compute(
            store.progress(),
            &self.drag,
            &self.hover,
            store.interface().is_seeking,
        )
    }

    /// Translate this frame's pointer state into bar events.
    fn collect_events(&self, ui: &egui::Ui, response: &egui::Response) -> Vec<BarEvent> {
        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });

        let mut events = Vec::new();

        match response.hover_pos() {
            Some(pos) => events.push(BarEvent::HoverMoved(pos.x)),
            None if self.hover.is_active() => events.push(BarEvent::HoverLeft),
            None => {}
        }

        let mut dragging = self.drag.dragging();
        if pressed && response.contains_pointer() {
            if let Some(pos) = pointer {
                events.push(BarEvent::Pressed(pos.x));
                dragging = true;
            }
        } else if dragging {
            if let Some(pos) = pointer {
                events.push(BarEvent::DragMoved(pos.x));
            }
        }

        if released && dragging {
            events.push(BarEvent::Released);
        }

        events
    }

    /// Show the bar and handle its interaction for this frame.
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut PlayerStore) -> egui::Response {
        let desired = egui::vec2(ui.available_width(), HIT_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());

        for event in self.collect_events(ui, &response) {
            self.apply(event, rect.left(), rect.width(), store);
        }
        self.publish(store);

        let layout = self.layout(store);

        if response.hovered() || self.drag.dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &layout);
        }

        if let Some(anchor) = layout.preview_anchor {
            let anchor_x = rect.left() + rect.width() * (anchor / 100.0) as f32;
            self.preview.show(
                ui.ctx(),
                store.thumbnails(),
                layout.preview_timestamp,
                anchor_x,
                rect,
                self.style.thumbnail_height,
            );
        }

        response
    }

    fn paint(&self, ui: &egui::Ui, rect: egui::Rect, layout: &BarLayout) {
        let painter = ui.painter();

        let track_height = if layout.expanded {
            self.style.hover_height
        } else {
            self.style.height
        };
        let rounding = track_height / 2.0;
        let track = egui::Rect::from_center_size(rect.center(), egui::vec2(rect.width(), track_height));

        painter.rect_filled(track, rounding, TRACK_COLOR);

        let fill = |ratio: f64| {
            egui::Rect::from_min_size(
                track.min,
                egui::vec2(track.width() * ratio as f32, track_height),
            )
        };

        painter.rect_filled(fill(layout.buffered), rounding, BUFFERED_COLOR);
        painter.rect_filled(fill(layout.watched), rounding, WATCHED_COLOR);

        if layout.show_handle {
            let handle = egui::pos2(
                track.left() + track.width() * layout.watched as f32,
                track.center().y,
            );
            painter.circle_filled(handle, self.style.handle_radius, egui::Color32::WHITE);
        }
    }
}
