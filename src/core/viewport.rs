use serde::{Deserialize, Serialize};

/// Smallest representable viewport length, used only to keep degenerate
/// inputs from collapsing `left == right`.
const MINIMUM_LENGTH: f64 = 1e-9;

/// Currently visible unit-interval slice of the committed range.
///
/// Invariant: `0 <= left < right <= 1`. The per-chart `maximum_zoom` lower
/// bound on `right - left` is enforced by the zoom operations, not by the
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalViewport {
    left: f64,
    right: f64,
}

impl Default for HorizontalViewport {
    fn default() -> Self {
        Self::full()
    }
}

impl HorizontalViewport {
    /// Builds a viewport from unit fractions, sanitizing degenerate input.
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        let left = if left.is_finite() { left } else { 0.0 };
        let right = if right.is_finite() { right } else { 1.0 };

        let (mut left, mut right) = (left.min(right), left.max(right));
        left = left.clamp(0.0, 1.0);
        right = right.clamp(0.0, 1.0);
        if right - left < MINIMUM_LENGTH {
            if right + MINIMUM_LENGTH <= 1.0 {
                right += MINIMUM_LENGTH;
            } else {
                left -= MINIMUM_LENGTH;
            }
        }

        Self { left, right }
    }

    /// The fully-zoomed-out viewport `[0, 1]`.
    #[must_use]
    pub fn full() -> Self {
        Self {
            left: 0.0,
            right: 1.0,
        }
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.left == 0.0 && self.right == 1.0
    }

    #[must_use]
    pub fn contains(self, unit: f64) -> bool {
        unit >= self.left && unit <= self.right
    }

    /// Zooms so the point at viewport fraction `center` keeps its domain
    /// position, clamping the resulting length into `[maximum_zoom, 1]`.
    ///
    /// `factor > 1` lengthens the viewport (zoom out), `factor < 1` shortens
    /// it (zoom in). `factor == 1` returns `self` bitwise unchanged.
    #[must_use]
    pub fn zoomed_around(self, center: f64, factor: f64, maximum_zoom: f64) -> Self {
        if factor == 1.0 || !factor.is_finite() || factor <= 0.0 {
            return self;
        }

        let center = if center.is_finite() {
            center.clamp(0.0, 1.0)
        } else {
            0.5
        };
        let length = self.length();
        let minimum_length = if maximum_zoom.is_finite() {
            maximum_zoom.clamp(MINIMUM_LENGTH, 1.0)
        } else {
            MINIMUM_LENGTH
        };
        let new_length = (length * factor).clamp(minimum_length, 1.0);
        if new_length == length {
            return self;
        }

        let delta_length = new_length - length;
        let left = (self.left - delta_length * center).clamp(0.0, 1.0 - new_length);
        Self {
            left,
            right: left + new_length,
        }
    }

    /// Shifts the viewport by a unit-interval delta, preserving its length.
    ///
    /// Clamps at both edges; a viewport pinned against an edge absorbs the
    /// remainder of the delta.
    #[must_use]
    pub fn panned_by_units(self, delta_units: f64) -> Self {
        if !delta_units.is_finite() || delta_units == 0.0 {
            return self;
        }

        let length = self.length();
        let left = (self.left + delta_units).clamp(0.0, 1.0 - length);
        Self {
            left,
            right: left + length,
        }
    }
}

/// Per-chart choice of where content sits when it is shorter than the
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    /// Stack-style charts grow upward from the container's bottom edge.
    Bottom,
}

/// Vertical scroll window over chart content, in CSS pixels.
///
/// Invariant: `bottom - top` always equals the container's rendered height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalViewport {
    top: f64,
    bottom: f64,
}

impl VerticalViewport {
    #[must_use]
    pub fn new(container_height: f64) -> Self {
        let container_height = container_height.max(0.0);
        Self {
            top: 0.0,
            bottom: container_height,
        }
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Re-applies the clamp rules after a scroll, resize, or content change.
    ///
    /// Content taller than the container clamps `top` into
    /// `[0, content_height - container_height]`. Shorter content pins the
    /// window to the configured anchor, which can legitimately produce a
    /// negative `top` for bottom-anchored charts.
    #[must_use]
    pub fn clamped(
        self,
        container_height: f64,
        content_height: f64,
        anchor: VerticalAnchor,
    ) -> Self {
        let container_height = container_height.max(0.0);
        let content_height = content_height.max(0.0);

        if content_height <= container_height {
            return match anchor {
                VerticalAnchor::Top => Self {
                    top: 0.0,
                    bottom: container_height,
                },
                VerticalAnchor::Bottom => Self {
                    top: content_height - container_height,
                    bottom: content_height,
                },
            };
        }

        let top = self.top.clamp(0.0, content_height - container_height);
        Self {
            top,
            bottom: top + container_height,
        }
    }

    /// Shifts the window vertically and re-clamps.
    #[must_use]
    pub fn panned_by(
        self,
        delta_css: f64,
        container_height: f64,
        content_height: f64,
        anchor: VerticalAnchor,
    ) -> Self {
        if !delta_css.is_finite() || delta_css == 0.0 {
            return self.clamped(container_height, content_height, anchor);
        }

        Self {
            top: self.top + delta_css,
            bottom: self.bottom + delta_css,
        }
        .clamped(container_height, content_height, anchor)
    }
}
