// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hover thumbnail preview.
//!
//! Looks up the preview image nearest to the hovered media time and paints
//! it above the progress bar. The lookup result is memoized on the index
//! revision and the requested timestamp, so it is recomputed exactly when
//! either changes. The selected image is uploaded as a texture once and
//! reused until the selection moves.

use crate::models::thumbnail::ThumbnailIndex;

/// Whole-second media time at `percentage` (0-100) of `duration`.
///
/// Returns 0 while the duration is unknown.
pub fn thumbnail_timestamp(percentage: f64, duration: f64) -> i64 {
    let seconds = (percentage / 100.0 * duration).floor();
    if seconds.is_finite() {
        seconds as i64
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LookupKey {
    revision: u64,
    timestamp: i64,
}

/// Memoized nearest-thumbnail lookup plus its texture cache.
#[derive(Default)]
pub struct ThumbnailPreview {
    key: Option<LookupKey>,
    selected: Option<usize>,
    texture: Option<(LookupKey, usize, egui::TextureHandle)>,
    lookups: u64,
}

impl ThumbnailPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the image nearest to `timestamp`, recomputed only when the
    /// index or the timestamp changed since the previous call.
    pub fn select(&mut self, index: &ThumbnailIndex, timestamp: i64) -> Option<usize> {
        let key = LookupKey {
            revision: index.revision(),
            timestamp,
        };
        if self.key != Some(key) {
            self.selected = index.nearest(timestamp as f64).map(|(idx, _)| idx);
            self.key = Some(key);
            self.lookups += 1;
            log::trace!("Thumbnail lookup #{} at {}s", self.lookups, timestamp);
        }
        self.selected
    }

    /// Number of lookups actually performed.
    #[cfg(test)]
    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    /// Texture for the currently selected image, uploading it on first use.
    fn texture(&mut self, ctx: &egui::Context, index: &ThumbnailIndex) -> Option<egui::TextureHandle> {
        let key = self.key?;
        let selected = self.selected?;

        if let Some((cached_key, cached_idx, texture)) = &self.texture {
            if cached_key.revision == key.revision && *cached_idx == selected {
                return Some(texture.clone());
            }
        }

        let image = index.images().get(selected)?;
        let data = &image.data;
        let expected = data.width as usize * data.height as usize * 4;
        if data.pixels.len() != expected {
            log::warn!(
                "Thumbnail at {:.1}s has {} bytes, expected {}",
                image.at,
                data.pixels.len(),
                expected
            );
            self.texture = None;
            return None;
        }

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [data.width as usize, data.height as usize],
            &data.pixels,
        );
        let texture = ctx.load_texture("thumbnail_preview", color_image, egui::TextureOptions::LINEAR);
        self.texture = Some((key, selected, texture.clone()));
        Some(texture)
    }

    /// Paint the preview for `timestamp` centred on `anchor_x`, sitting on
    /// top of `bar_rect`. Draws nothing when no thumbnail is available.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        index: &ThumbnailIndex,
        timestamp: i64,
        anchor_x: f32,
        bar_rect: egui::Rect,
        height: f32,
    ) {
        if self.select(index, timestamp).is_none() {
            return;
        }
        let Some(texture) = self.texture(ctx, index) else {
            return;
        };

        let [tex_w, tex_h] = texture.size();
        if tex_h == 0 {
            return;
        }
        let width = height * tex_w as f32 / tex_h as f32;

        let max_left = (bar_rect.right() - width).max(bar_rect.left());
        let left = (anchor_x - width / 2.0).clamp(bar_rect.left(), max_left);
        let rect = egui::Rect::from_min_size(
            egui::pos2(left, bar_rect.top() - height - 4.0),
            egui::vec2(width, height),
        );

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("thumbnail_preview"),
        ));
        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::from_gray(20)));
    }
}
