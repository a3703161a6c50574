// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! Conversions between screen-space pointer positions on the bar and the
//! ratios/percentages the progress bar works with.

/// Horizontal position of `pointer_x` inside a bar, as a percentage.
///
/// The result is not clamped: a pointer left of the bar gives a negative
/// value and one right of it gives more than 100.
pub fn pointer_percentage(pointer_x: f32, bar_left: f32, bar_width: f32) -> f64 {
    f64::from(pointer_x - bar_left) / f64::from(bar_width) * 100.0
}

/// `numerator / denominator`, or 0.0 when the division is not finite.
///
/// Zero or unknown media duration is rendered as an empty bar.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Clamp a ratio to [0, 1], mapping NaN to 0.
pub fn clamp_unit(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
