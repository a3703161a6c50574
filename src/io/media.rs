// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! Decodes thumbnail images into RGBA8 buffers ready to be uploaded as
//! egui textures.

use crate::models::thumbnail::ImageData;
use anyhow::{Context, Result};
use std::path::Path;

/// Load an image file as RGBA8.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();

    Ok(ImageData {
        width,
        height,
        pixels: image.into_raw().into(),
    })
}
