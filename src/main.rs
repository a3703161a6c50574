// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Seekbar - video progress bar with hover thumbnails
//!
//! A small desktop player shell around an interactive seek bar: buffered
//! range, drag-to-seek and thumbnail previews while hovering.

mod app;
mod config;
mod io;
mod models;
mod playback;
mod ui;
mod util;

use anyhow::Result;
use app::PlayerApp;
use config::AppConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Manifest paths in a config file are relative to that file
    let thumbnails = config.thumbnails.as_ref().map(|manifest| {
        match config_path.as_ref().and_then(|path| path.parent()) {
            Some(dir) if manifest.is_relative() => dir.join(manifest),
            _ => manifest.clone(),
        }
    });

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 270.0])
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Seekbar",
        options,
        Box::new(move |_cc| {
            let mut app = PlayerApp::new(&config);
            if let Some(path) = thumbnails {
                app.load_thumbnails(path);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
