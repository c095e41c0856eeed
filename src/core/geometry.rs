//! Pure conversions between domain time, unit-interval viewport fractions,
//! CSS pixels, and device pixels.
//!
//! All functions are total: degenerate ranges and scales early-return fixed
//! values instead of propagating `NaN` or `Infinity` into drawing code.

use crate::core::range::{CommittedRange, MINIMUM_DURATION};
use crate::core::viewport::HorizontalViewport;

/// Fraction of the committed range at `time`, clamped division-safe.
#[must_use]
pub fn time_to_unit(committed: CommittedRange, time: f64) -> f64 {
    if !time.is_finite() {
        return 0.0;
    }
    (time - committed.start()) / committed.safe_duration()
}

#[must_use]
pub fn unit_to_time(committed: CommittedRange, unit: f64) -> f64 {
    committed.start() + unit * committed.duration()
}

/// CSS x position of a unit fraction inside the visible viewport slice.
///
/// `margin_left` is the fixed chrome to the left of the drawn area and
/// `visible_width` the drawn area's CSS width. A zero-length viewport maps
/// everything to the left margin.
#[must_use]
pub fn unit_to_css_x(
    unit: f64,
    viewport: HorizontalViewport,
    margin_left: f64,
    visible_width: f64,
) -> f64 {
    let length = viewport.length();
    if length <= MINIMUM_DURATION {
        return margin_left;
    }
    margin_left + (unit - viewport.left()) / length * visible_width
}

/// Inverse of [`unit_to_css_x`]; a zero-width drawn area maps to the
/// viewport's left edge.
#[must_use]
pub fn css_x_to_unit(
    x_css: f64,
    viewport: HorizontalViewport,
    margin_left: f64,
    visible_width: f64,
) -> f64 {
    if visible_width <= 0.0 {
        return viewport.left();
    }
    viewport.left() + (x_css - margin_left) / visible_width * viewport.length()
}

/// Converts a CSS length to device pixels.
#[must_use]
pub fn css_to_device(css: f64, css_to_device_scale: f64) -> f64 {
    css * css_to_device_scale
}

/// Snaps a coordinate to the device-pixel grid, staying in the caller's
/// coordinate space.
///
/// `to_device_scale` is the factor from the caller's space to device pixels.
/// Snapping at device granularity avoids 1px seams between adjacent boxes
/// when the drawing context is not scaled to CSS pixels.
#[must_use]
pub fn snap_to_device_pixels(value: f64, to_device_scale: f64) -> f64 {
    if !to_device_scale.is_finite() || to_device_scale <= 0.0 {
        return value;
    }
    (value * to_device_scale).round() / to_device_scale
}

/// Snapped left/right edges of a box so adjacent boxes share device pixels.
#[must_use]
pub fn snapped_box_edges(x: f64, width: f64, to_device_scale: f64) -> (f64, f64) {
    (
        snap_to_device_pixels(x, to_device_scale),
        snap_to_device_pixels(x + width, to_device_scale),
    )
}
