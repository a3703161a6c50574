// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback progress snapshot.
//!
//! The values here are owned by the playback display and copied into the
//! store every frame; the progress bar only ever reads them.

use crate::util::geometry::{clamp_unit, safe_ratio};

/// Duration, play head and buffered position, all in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackProgress {
    pub duration: f64,
    pub time: f64,
    pub buffered: f64,
}

impl PlaybackProgress {
    /// Create a progress snapshot.
    pub fn new(duration: f64, time: f64, buffered: f64) -> Self {
        Self {
            duration,
            time,
            buffered,
        }
    }

    /// Fraction of the media that has been watched, clamped to [0, 1].
    pub fn watched_ratio(&self) -> f64 {
        clamp_unit(safe_ratio(self.time, self.duration))
    }

    /// Fraction of the media that is buffered, clamped to [0, 1].
    pub fn buffered_ratio(&self) -> f64 {
        clamp_unit(safe_ratio(self.buffered, self.duration))
    }

    /// Media time at `percentage` (0-100) of the duration.
    ///
    /// Returns 0.0 while the duration is unknown.
    pub fn time_at_percentage(&self, percentage: f64) -> f64 {
        let time = percentage / 100.0 * self.duration;
        if time.is_finite() {
            time
        } else {
            0.0
        }
    }

    /// Whether media metadata has been loaded.
    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}
