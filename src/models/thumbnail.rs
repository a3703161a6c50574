// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Thumbnail images and the ordered index used for hover previews.

use std::fmt;
use std::sync::Arc;

/// Decoded RGBA8 pixels of a preview image.
#[derive(Clone, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<[u8]>,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

/// A preview image taken at `at` seconds into the media.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailImage {
    pub at: f64,
    pub data: ImageData,
}

impl ThumbnailImage {
    pub fn new(at: f64, data: ImageData) -> Self {
        Self { at, data }
    }
}

/// Find the thumbnail closest to `at` in a slice sorted by timestamp.
///
/// Returns the index and the image, or `None` for an empty slice. When
/// `at` sits exactly between two images the later one wins.
pub fn nearest_image_at(images: &[ThumbnailImage], at: f64) -> Option<(usize, &ThumbnailImage)> {
    if images.is_empty() {
        return None;
    }

    let past = images.partition_point(|image| image.at <= at);

    // Nothing after `at`, so the last image is the closest
    if past == images.len() {
        let last = images.len() - 1;
        return Some((last, &images[last]));
    }
    if past == 0 {
        return Some((0, &images[0]));
    }

    let before = &images[past - 1];
    let after = &images[past];
    if (before.at - at).abs() < (after.at - at).abs() {
        Some((past - 1, before))
    } else {
        Some((past, after))
    }
}

/// Thumbnails kept sorted by timestamp.
///
/// `revision` changes on every mutation so that consumers can tell when a
/// previous lookup went stale.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailIndex {
    images: Vec<ThumbnailImage>,
    revision: u64,
}

impl ThumbnailIndex {
    /// Insert an image, keeping the index ordered.
    ///
    /// Images with an equal timestamp keep their insertion order.
    pub fn insert(&mut self, image: ThumbnailImage) {
        let position = self.images.partition_point(|existing| existing.at <= image.at);
        self.images.insert(position, image);
        self.revision += 1;
    }

    /// Replace the whole index with `images`.
    ///
    /// The sort is stable, so images with an equal timestamp keep their
    /// order.
    pub fn replace(&mut self, mut images: Vec<ThumbnailImage>) {
        images.sort_by(|a, b| a.at.total_cmp(&b.at));
        self.images = images;
        self.revision += 1;
    }

    /// Remove every image.
    pub fn clear(&mut self) {
        if !self.images.is_empty() {
            self.images.clear();
            self.revision += 1;
        }
    }

    pub fn images(&self) -> &[ThumbnailImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Nearest image to `at` seconds.
    pub fn nearest(&self, at: f64) -> Option<(usize, &ThumbnailImage)> {
        nearest_image_at(&self.images, at)
    }
}

#[cfg(test)]
pub(crate) fn test_image(at: f64) -> ThumbnailImage {
    ThumbnailImage::new(
        at,
        ImageData {
            width: 1,
            height: 1,
            pixels: Arc::from(vec![255u8, 0, 0, 255]),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(images: &[ThumbnailImage], at: f64) -> Option<usize> {
        nearest_image_at(images, at).map(|(idx, _)| idx)
    }

    #[test]
    fn test_empty_index_has_no_nearest() {
        assert!(nearest_image_at(&[], 12.0).is_none());
        assert!(ThumbnailIndex::default().nearest(0.0).is_none());
    }

    #[test]
    fn test_nearest_picks_closest_neighbour() {
        let images = vec![test_image(0.0), test_image(10.0), test_image(20.0)];

        assert_eq!(index_of(&images, 0.0), Some(0));
        assert_eq!(index_of(&images, 4.0), Some(0));
        assert_eq!(index_of(&images, 6.0), Some(1));
        assert_eq!(index_of(&images, 10.0), Some(1));
        assert_eq!(index_of(&images, 14.9), Some(1));
        assert_eq!(index_of(&images, 16.0), Some(2));
    }

    #[test]
    fn test_nearest_tie_prefers_later_image() {
        let images = vec![test_image(0.0), test_image(10.0)];
        assert_eq!(index_of(&images, 5.0), Some(1));
    }

    #[test]
    fn test_nearest_outside_range() {
        let images = vec![test_image(5.0), test_image(10.0)];
        assert_eq!(index_of(&images, -3.0), Some(0));
        assert_eq!(index_of(&images, 2.0), Some(0));
        assert_eq!(index_of(&images, 500.0), Some(1));
    }

    #[test]
    fn test_insert_keeps_order_and_bumps_revision() {
        let mut index = ThumbnailIndex::default();
        index.insert(test_image(20.0));
        index.insert(test_image(0.0));
        index.insert(test_image(10.0));

        let times: Vec<f64> = index.images().iter().map(|i| i.at).collect();
        assert_eq!(times, vec![0.0, 10.0, 20.0]);
        assert_eq!(index.revision(), 3);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_clear_only_bumps_revision_when_not_empty() {
        let mut index = ThumbnailIndex::default();
        index.clear();
        assert_eq!(index.revision(), 0);

        index.insert(test_image(1.0));
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.revision(), 2);
    }

    #[test]
    fn test_replace_sorts_images() {
        let mut index = ThumbnailIndex::default();
        index.insert(test_image(99.0));
        let before = index.revision();

        index.replace(vec![test_image(30.0), test_image(15.0)]);

        let times: Vec<f64> = index.images().iter().map(|i| i.at).collect();
        assert_eq!(times, vec![15.0, 30.0]);
        assert_eq!(index.revision(), before + 1);
    }

    #[test]
    fn test_replace_keeps_order_of_equal_timestamps() {
        let mut first = test_image(10.0);
        first.data.width = 7;
        let mut second = test_image(10.0);
        second.data.width = 9;

        let mut index = ThumbnailIndex::default();
        index.replace(vec![test_image(20.0), first, second]);

        let widths: Vec<u32> = index.images().iter().map(|i| i.data.width).collect();
        assert_eq!(widths, vec![7, 9, 1]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_nearest_is_never_farther_than_any_image(
                mut times in prop::collection::vec(0.0f64..1000.0, 1..40),
                at in -50.0f64..1050.0,
            ) {
                times.sort_by(|a, b| a.total_cmp(b));
                let images: Vec<ThumbnailImage> = times.iter().map(|t| test_image(*t)).collect();

                let (_, nearest) = nearest_image_at(&images, at).unwrap();
                let best = (nearest.at - at).abs();
                for image in &images {
                    prop_assert!(best <= (image.at - at).abs());
                }
            }
        }
    }
}
