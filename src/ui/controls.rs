// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback controls row.
//!
//! Play/pause button and the time label. While the seek bar is being
//! dragged the label shows the provisional drag time instead of the play
//! head.

use crate::models::{progress::PlaybackProgress, store::InterfaceState, store::PlayerStore};

/// Format seconds as `m:ss`, or `h:mm:ss` when `show_hours` is set.
pub fn format_time(seconds: f64, show_hours: bool) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if show_hours {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", total / 60, secs)
    }
}

/// Time shown in the label: the drag position while seeking.
pub fn displayed_time(progress: &PlaybackProgress, interface: &InterfaceState) -> f64 {
    if interface.is_seeking {
        interface.dragging_time
    } else {
        progress.time
    }
}

/// `current / duration` label text.
pub fn time_label(progress: &PlaybackProgress, interface: &InterfaceState) -> String {
    let show_hours = progress.duration.is_finite() && progress.duration >= 3600.0;
    format!(
        "{} / {}",
        format_time(displayed_time(progress, interface), show_hours),
        format_time(progress.duration, show_hours)
    )
}

/// Display the controls row.
pub fn show(ui: &mut egui::Ui, store: &mut PlayerStore) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let play_pause = if store.is_paused() { "▶" } else { "⏸" };
        let playable = store.has_display() && store.progress().has_duration();
        if ui
            .add_enabled(playable, egui::Button::new(play_pause))
            .on_hover_text("Play/Pause (Space)")
            .clicked()
        {
            store.toggle_playback();
        }

        ui.separator();

        let progress = store.progress();
        let interface = store.interface();
        let label = egui::RichText::new(time_label(&progress, &interface)).monospace();
        ui.label(if interface.is_seeking { label.strong() } else { label });

        if !store.thumbnails().is_empty() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} thumbnails", store.thumbnails().len()))
                    .italics()
                    .weak(),
            );
        }
    });
}
