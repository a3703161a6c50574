// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Thumbnail manifest loading.
//!
//! A manifest lists precomputed preview images and the media time each was
//! taken at:
//!
//! ```yaml
//! thumbnails:
//!   - at: 0.0
//!     path: thumbs/0000.png
//!   - at: 10.0
//!     path: thumbs/0010.png
//! ```
//!
//! Relative image paths resolve against the manifest's directory.

use super::{media::load_image, serialization::read_document};
use crate::models::thumbnail::ThumbnailImage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One manifest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub at: f64,
    pub path: PathBuf,
}

/// List of preview images for one piece of media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailManifest {
    #[serde(default)]
    pub thumbnails: Vec<ManifestEntry>,
}

impl ThumbnailManifest {
    /// Read a YAML or JSON manifest.
    pub fn load(path: &Path) -> Result<Self> {
        read_document(path)
    }
}

/// Load every image listed in the manifest at `path`.
///
/// Entries that fail to decode or carry a non-finite timestamp are skipped
/// with a warning; a manifest that cannot be read at all is an error.
pub fn load_thumbnails(path: &Path) -> Result<Vec<ThumbnailImage>> {
    let manifest = ThumbnailManifest::load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut images = Vec::with_capacity(manifest.thumbnails.len());
    for entry in &manifest.thumbnails {
        if !entry.at.is_finite() {
            log::warn!("Skipping thumbnail {} with invalid time", entry.path.display());
            continue;
        }

        let image_path = base.join(&entry.path);
        match load_image(&image_path) {
            Ok(data) => images.push(ThumbnailImage::new(entry.at, data)),
            Err(e) => log::warn!("Skipping thumbnail: {:#}", e),
        }
    }

    log::info!(
        "Loaded {} of {} thumbnails from {}",
        images.len(),
        manifest.thumbnails.len(),
        path.display()
    );
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path) {
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_load_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("thumbs")).unwrap();
        write_png(&dir.path().join("thumbs/a.png"));
        write_png(&dir.path().join("thumbs/b.png"));

        let manifest = dir.path().join("thumbs.yaml");
        std::fs::write(
            &manifest,
            "thumbnails:\n  - at: 10.0\n    path: thumbs/b.png\n  - at: 0.0\n    path: thumbs/a.png\n",
        )
        .unwrap();

        let images = load_thumbnails(&manifest).unwrap();
        let times: Vec<f64> = images.iter().map(|i| i.at).collect();
        assert_eq!(times, vec![10.0, 0.0]);
    }

    #[test]
    fn test_broken_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("ok.png"));

        let manifest = dir.path().join("thumbs.json");
        std::fs::write(
            &manifest,
            r#"{"thumbnails": [
                {"at": 0.0, "path": "ok.png"},
                {"at": 5.0, "path": "missing.png"}
            ]}"#,
        )
        .unwrap();

        let images = load_thumbnails(&manifest).unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].at, 0.0);
    }

    #[test]
    fn test_empty_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("thumbs.yaml");
        std::fs::write(&manifest, "{}\n").unwrap();

        assert!(load_thumbnails(&manifest).unwrap().is_empty());
    }

    #[test]
    fn test_unreadable_manifest_is_error() {
        assert!(load_thumbnails(Path::new("/nonexistent/thumbs.yaml")).is_err());
    }
}
