// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Simulated media clock.
//!
//! Stands in for a real decoder so the seek bar has a play head to move.
//! Nothing is decoded or downloaded: time advances with the frame clock and
//! the buffered position trails a fixed distance ahead of it.

use crate::models::{progress::PlaybackProgress, store::PlaybackDisplay};

/// Play head over a fixed-length piece of media.
#[derive(Debug, Clone)]
pub struct MediaClock {
    duration: f64,
    time: f64,
    buffered: f64,
    buffer_ahead: f64,
    paused: bool,
}

impl MediaClock {
    /// Create a paused clock at time zero.
    pub fn new(duration: f64, buffer_ahead: f64) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        let buffer_ahead = buffer_ahead.max(0.0);
        Self {
            duration,
            time: 0.0,
            buffered: buffer_ahead.min(duration),
            buffer_ahead,
            paused: true,
        }
    }

    fn refill(&mut self) {
        let target = (self.time + self.buffer_ahead).min(self.duration);
        // A seek backwards keeps what is already buffered
        self.buffered = self.buffered.max(target).max(self.time);
    }
}

impl PlaybackDisplay for MediaClock {
    fn set_time(&mut self, seconds: f64) {
        self.time = if seconds.is_finite() {
            seconds.clamp(0.0, self.duration)
        } else {
            0.0
        };
        self.refill();
    }

    fn play(&mut self) {
        if self.time >= self.duration {
            self.time = 0.0;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn advance(&mut self, dt: f64) {
        if self.paused || dt <= 0.0 {
            return;
        }
        self.time = (self.time + dt).min(self.duration);
        self.refill();
        if self.time >= self.duration {
            self.paused = true;
            log::info!("Reached end of media");
        }
    }

    fn progress(&self) -> PlaybackProgress {
        PlaybackProgress::new(self.duration, self.time, self.buffered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_paused_at_zero() {
        let clock = MediaClock::new(120.0, 30.0);
        assert!(clock.is_paused());
        assert_eq!(clock.progress(), PlaybackProgress::new(120.0, 0.0, 30.0));
    }

    #[test]
    fn test_advance_moves_time_and_buffer() {
        let mut clock = MediaClock::new(120.0, 30.0);
        clock.play();
        clock.advance(10.0);

        let progress = clock.progress();
        assert_eq!(progress.time, 10.0);
        assert_eq!(progress.buffered, 40.0);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut clock = MediaClock::new(20.0, 30.0);
        clock.play();
        clock.advance(25.0);

        assert_eq!(clock.progress().time, 20.0);
        assert_eq!(clock.progress().buffered, 20.0);
        assert!(clock.is_paused());

        clock.play();
        assert_eq!(clock.progress().time, 0.0);
    }

    #[test]
    fn test_set_time_clamps_into_media() {
        let mut clock = MediaClock::new(100.0, 10.0);
        clock.set_time(150.0);
        assert_eq!(clock.progress().time, 100.0);

        clock.set_time(-5.0);
        assert_eq!(clock.progress().time, 0.0);

        clock.set_time(f64::NAN);
        assert_eq!(clock.progress().time, 0.0);
    }

    #[test]
    fn test_seek_backwards_keeps_buffer() {
        let mut clock = MediaClock::new(100.0, 10.0);
        clock.set_time(50.0);
        assert_eq!(clock.progress().buffered, 60.0);

        clock.set_time(5.0);
        assert_eq!(clock.progress().buffered, 60.0);
    }

    #[test]
    fn test_paused_clock_does_not_advance() {
        let mut clock = MediaClock::new(100.0, 10.0);
        clock.advance(5.0);
        assert_eq!(clock.progress().time, 0.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_buffered_never_behind_time(
                duration in 1.0f64..10_000.0,
                ahead in 0.0f64..120.0,
                seeks in prop::collection::vec(-100.0f64..11_000.0, 1..20),
            ) {
                let mut clock = MediaClock::new(duration, ahead);
                for seek in seeks {
                    clock.set_time(seek);
                    let progress = clock.progress();
                    prop_assert!(progress.time >= 0.0 && progress.time <= duration);
                    prop_assert!(progress.buffered >= progress.time);
                    prop_assert!(progress.buffered <= duration);
                }
            }
        }
    }
}
