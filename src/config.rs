// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Loaded from an optional YAML or JSON file passed as the first command
//! line argument. Every field has a default, so a partial file only
//! overrides what it names.

use crate::io::serialization::read_document;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Seekbar".to_string(),
            width: 960.0,
            height: 540.0,
        }
    }
}

/// Simulated media settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Media length in seconds.
    pub duration: f64,
    /// How far ahead of the play head the buffered range runs, in seconds.
    pub buffer_ahead: f64,
    /// Start playing as soon as the window opens.
    pub autoplay: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            duration: 600.0,
            buffer_ahead: 30.0,
            autoplay: false,
        }
    }
}

/// Progress bar dimensions in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Track thickness at rest.
    pub height: f32,
    /// Track thickness while hovered or dragged.
    pub hover_height: f32,
    pub handle_radius: f32,
    /// Height of the hover thumbnail; width follows the image aspect.
    pub thumbnail_height: f32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            height: 4.0,
            hover_height: 6.0,
            handle_radius: 8.0,
            thumbnail_height: 48.0,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub media: MediaConfig,
    pub bar: BarConfig,
    /// Thumbnail manifest to load at startup.
    pub thumbnails: Option<PathBuf>,
}

impl AppConfig {
    /// Load a configuration file, replacing invalid values with defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config: AppConfig = read_document(path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config.sanitized())
    }

    /// Replace non-positive or non-finite sizes with their defaults.
    pub fn sanitized(mut self) -> Self {
        fn positive_f32(value: f32, fallback: f32) -> f32 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Invalid size {}, using {}", value, fallback);
                fallback
            }
        }

        let window = WindowConfig::default();
        self.window.width = positive_f32(self.window.width, window.width);
        self.window.height = positive_f32(self.window.height, window.height);

        let bar = BarConfig::default();
        self.bar.height = positive_f32(self.bar.height, bar.height);
        self.bar.hover_height = positive_f32(self.bar.hover_height, bar.hover_height);
        self.bar.handle_radius = positive_f32(self.bar.handle_radius, bar.handle_radius);
        self.bar.thumbnail_height = positive_f32(self.bar.thumbnail_height, bar.thumbnail_height);

        let media = MediaConfig::default();
        if !self.media.duration.is_finite() || self.media.duration < 0.0 {
            log::warn!("Invalid media duration {}, using {}", self.media.duration, media.duration);
            self.media.duration = media.duration;
        }
        if !self.media.buffer_ahead.is_finite() || self.media.buffer_ahead < 0.0 {
            self.media.buffer_ahead = media.buffer_ahead;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::serialization::{parse_document, Format};

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "media:\n  duration: 90\nbar:\n  thumbnail_height: 64\n";
        let config: AppConfig = parse_document(yaml, Format::Yaml).unwrap();

        assert_eq!(config.media.duration, 90.0);
        assert_eq!(config.media.buffer_ahead, 30.0);
        assert_eq!(config.bar.thumbnail_height, 64.0);
        assert_eq!(config.bar.height, 4.0);
        assert_eq!(config.window, WindowConfig::default());
        assert!(config.thumbnails.is_none());
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"media": {"autoplay": true}, "thumbnails": "thumbs.yaml"}"#;
        let config: AppConfig = parse_document(json, Format::Json).unwrap();

        assert!(config.media.autoplay);
        assert_eq!(config.thumbnails, Some(PathBuf::from("thumbs.yaml")));
    }

    #[test]
    fn test_sanitize_invalid_values() {
        let mut config = AppConfig::default();
        config.window.width = -5.0;
        config.bar.hover_height = 0.0;
        config.media.duration = -1.0;
        config.media.buffer_ahead = f64::NAN;

        let config = config.sanitized();
        assert_eq!(config.window.width, 960.0);
        assert_eq!(config.bar.hover_height, 6.0);
        assert_eq!(config.media.duration, 600.0);
        assert_eq!(config.media.buffer_ahead, 30.0);
    }

    #[test]
    fn test_zero_duration_is_allowed() {
        let mut config = AppConfig::default();
        config.media.duration = 0.0;
        assert_eq!(config.sanitized().media.duration, 0.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seekbar.yml");
        std::fs::write(&path, "window:\n  title: Demo\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.window.title, "Demo");
    }
}
