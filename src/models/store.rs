// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Player state store.
//!
//! The store owns the playback display, the latest progress snapshot, the
//! interface flags the progress bar publishes while scrubbing, and the
//! thumbnail index. It is passed by `&mut` into the UI every frame, so all
//! reads and writes happen on the UI thread in a fixed order.

use super::progress::PlaybackProgress;
use super::thumbnail::ThumbnailIndex;

/// Something that plays media and can be told to jump to a time.
pub trait PlaybackDisplay {
    /// Seek to `seconds` into the media.
    fn set_time(&mut self, seconds: f64);

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Advance playback by `dt` seconds of wall-clock time.
    fn advance(&mut self, dt: f64);

    /// Current duration, play head and buffered position.
    fn progress(&self) -> PlaybackProgress;
}

/// Interface flags shared between the progress bar and its siblings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterfaceState {
    /// True for the whole press-to-release interval of a scrub gesture.
    pub is_seeking: bool,
    /// Provisional media time under the drag handle.
    pub dragging_time: f64,
}

/// Shared player state read by the progress bar and the time label.
#[derive(Default)]
pub struct PlayerStore {
    progress: PlaybackProgress,
    display: Option<Box<dyn PlaybackDisplay>>,
    interface: InterfaceState,
    thumbnails: ThumbnailIndex,
}

impl PlayerStore {
    /// Attach a playback display and take its progress as the first snapshot.
    pub fn with_display(display: Box<dyn PlaybackDisplay>) -> Self {
        let progress = display.progress();
        Self {
            progress,
            display: Some(display),
            ..Self::default()
        }
    }

    pub fn progress(&self) -> PlaybackProgress {
        self.progress
    }

    pub fn interface(&self) -> InterfaceState {
        self.interface
    }

    pub fn thumbnails(&self) -> &ThumbnailIndex {
        &self.thumbnails
    }

    pub fn thumbnails_mut(&mut self) -> &mut ThumbnailIndex {
        &mut self.thumbnails
    }

    pub fn has_display(&self) -> bool {
        self.display.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.display.as_ref().map_or(true, |display| display.is_paused())
    }

    pub fn set_dragging_time(&mut self, seconds: f64) {
        self.interface.dragging_time = seconds;
    }

    pub fn set_seeking(&mut self, seeking: bool) {
        if self.interface.is_seeking != seeking {
            log::debug!("Seeking: {}", seeking);
        }
        self.interface.is_seeking = seeking;
    }

    /// Ask the display to jump to `seconds`.
    ///
    /// The snapshot is refreshed right away so the next frame does not
    /// briefly render the old play head.
    pub fn seek(&mut self, seconds: f64) {
        match self.display.as_mut() {
            Some(display) => {
                display.set_time(seconds);
                self.progress = display.progress();
                log::info!("Seek to {:.2}s", seconds);
            }
            None => log::warn!("Seek to {:.2}s ignored, no media loaded", seconds),
        }
    }

    /// Toggle between playing and paused.
    pub fn toggle_playback(&mut self) {
        if let Some(display) = self.display.as_mut() {
            if display.is_paused() {
                display.play();
                log::info!("Playback resumed");
            } else {
                display.pause();
                log::info!("Playback paused");
            }
        }
    }

    /// Advance the display by `dt` seconds and refresh the progress snapshot.
    pub fn tick(&mut self, dt: f64) {
        if let Some(display) = self.display.as_mut() {
            display.advance(dt);
            self.progress = display.progress();
        }
    }
}
