// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Owns the player store and the seek bar, drives the media clock from the
//! frame timer and loads thumbnail manifests on a background thread.

use crate::config::AppConfig;
use crate::io::manifest::load_thumbnails;
use crate::models::{store::PlayerStore, thumbnail::ThumbnailImage};
use crate::playback::MediaClock;
use crate::ui::{controls, progress_bar::ProgressBar};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Result of a background manifest load.
type ThumbnailLoad = Result<Vec<ThumbnailImage>, String>;

/// Main application state.
pub struct PlayerApp {
    /// Shared player state
    store: PlayerStore,

    /// Seek bar widget state
    progress_bar: ProgressBar,

    /// Receiver for background thumbnail loading
    thumbnail_loader: Option<Receiver<ThumbnailLoad>>,

    /// Loading state message
    loading_message: Option<String>,

    /// Last load error, shown until the next load
    error_message: Option<String>,
}

impl PlayerApp {
    /// Create the application from a configuration.
    pub fn new(config: &AppConfig) -> Self {
        let clock = MediaClock::new(config.media.duration, config.media.buffer_ahead);
        let mut store = PlayerStore::with_display(Box::new(clock));
        if config.media.autoplay {
            store.toggle_playback();
        }

        Self {
            store,
            progress_bar: ProgressBar::new(config.bar),
            thumbnail_loader: None,
            loading_message: None,
            error_message: None,
        }
    }

    /// Load a thumbnail manifest and its images (asynchronously).
    pub fn load_thumbnails(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.thumbnail_loader = Some(receiver);
        self.loading_message = Some(format!("Loading thumbnails from {}...", path.display()));
        self.error_message = None;

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = load_thumbnails(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send(result);
        });
    }

    /// Move finished background work into the store.
    fn poll_loader(&mut self) {
        let Some(receiver) = &self.thumbnail_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };

        self.thumbnail_loader = None;
        self.loading_message = None;

        match result {
            Ok(images) => {
                log::info!("Thumbnail index ready with {} images", images.len());
                self.store.thumbnails_mut().replace(images);
            }
            Err(e) => {
                log::error!("Failed to load thumbnails: {}", e);
                self.error_message = Some(e);
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Thumbnails...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Thumbnail manifest", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_thumbnails(path);
                        }
                        ui.close_menu();
                    }
                    let has_thumbnails = !self.store.thumbnails().is_empty();
                    if ui
                        .add_enabled(has_thumbnails, egui::Button::new("Clear Thumbnails"))
                        .clicked()
                    {
                        self.store.thumbnails_mut().clear();
                        log::info!("Cleared thumbnails");
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }

    fn media_area(&self, ui: &mut egui::Ui) {
        if let Some(ref message) = self.loading_message {
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.spinner();
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new(message)
                            .size(16.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                });
            });
            return;
        }

        let progress = self.store.progress();
        let interface = self.store.interface();
        ui.centered_and_justified(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(
                    egui::RichText::new(controls::time_label(&progress, &interface))
                        .size(32.0)
                        .monospace()
                        .color(egui::Color32::from_gray(200)),
                );
                if let Some(ref error) = self.error_message {
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new(error).color(egui::Color32::LIGHT_RED));
                } else if self.store.thumbnails().is_empty() {
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Thumbnails... for hover previews")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                }
            });
        });
    }
}

impl eframe::App for PlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();

        let dt = ctx.input(|i| f64::from(i.stable_dt));
        self.store.tick(dt);

        // Keep repainting while something moves
        if !self.store.is_paused() || self.loading_message.is_some() {
            ctx.request_repaint();
        }

        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.store.toggle_playback();
        }

        self.menu_bar(ctx);

        egui::TopBottomPanel::bottom("player_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.progress_bar.show(ui, &mut self.store);
            controls::show(ui, &mut self.store);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::canvas(&ctx.style()).fill(egui::Color32::from_gray(16)))
            .show(ctx, |ui| self.media_area(ui));
    }
}
