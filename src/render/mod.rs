//! Host-surface contracts.
//!
//! The crate never draws pixels itself. It manages a canvas element through
//! [`CanvasHandle`] (bitmap sizing, CSS size, context transform) and hands
//! the per-frame draw off to a chart adapter. `NullCanvas` is the headless
//! implementation used by tests and teardown paths.

use serde::{Deserialize, Serialize};

use crate::schedule::FrameRequester;

/// Contract implemented by the hosting environment's 2D canvas element.
///
/// Implementations receive only sizing and transform commands; all drawing
/// goes through the chart adapter so pixel code stays isolated from viewport
/// and interaction logic.
pub trait CanvasHandle {
    /// `false` while unmounted; scheduled draws are skipped silently until
    /// the handle reattaches.
    fn is_attached(&self) -> bool;

    /// Resizes the backing bitmap, in device pixels.
    fn set_bitmap_size(&mut self, device_width: u32, device_height: u32);

    /// Updates the element's CSS size string.
    fn set_css_size(&mut self, css_width: f64, css_height: f64);

    /// Scales the drawing context so adapter code can draw in CSS units.
    fn set_context_scale(&mut self, scale: f64);
}

/// Coordinate scales handed to the adapter's draw callback.
///
/// `css_to_user` is `1.0` when the context was scaled to CSS pixels and the
/// device-pixel ratio otherwise; box edges should be snapped at
/// `user_to_device` granularity to avoid 1px seams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawScale {
    pub css_to_device: f64,
    pub css_to_user: f64,
}

impl DrawScale {
    #[must_use]
    pub fn new(css_to_device: f64, css_to_user: f64) -> Self {
        Self {
            css_to_device,
            css_to_user,
        }
    }

    /// Factor from the adapter's drawing space to device pixels.
    #[must_use]
    pub fn user_to_device(self) -> f64 {
        if self.css_to_user > 0.0 {
            self.css_to_device / self.css_to_user
        } else {
            self.css_to_device
        }
    }
}

/// Hover change handed to the adapter's draw callback.
///
/// When `is_hovered_only_different` is set, nothing but the hovered item
/// changed since the previous draw, so adapters can redraw just the two
/// affected items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverDelta<T> {
    pub hovered_item: Option<T>,
    pub prev_hovered_item: Option<T>,
    pub is_hovered_only_different: bool,
}

impl<T> Default for HoverDelta<T> {
    fn default() -> Self {
        Self {
            hovered_item: None,
            prev_hovered_item: None,
            is_hovered_only_different: false,
        }
    }
}

/// No-op canvas used by tests and headless embedding.
///
/// It records every sizing command so tests can assert the device-pixel
/// bookkeeping without a real drawing surface.
#[derive(Debug)]
pub struct NullCanvas {
    pub attached: bool,
    pub bitmap_size: Option<(u32, u32)>,
    pub css_size: Option<(f64, f64)>,
    pub context_scale: Option<f64>,
    pub frame_request_count: usize,
}

impl Default for NullCanvas {
    fn default() -> Self {
        Self {
            attached: true,
            bitmap_size: None,
            css_size: None,
            context_scale: None,
            frame_request_count: 0,
        }
    }
}

impl NullCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn detached() -> Self {
        Self {
            attached: false,
            ..Self::default()
        }
    }
}

impl CanvasHandle for NullCanvas {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_bitmap_size(&mut self, device_width: u32, device_height: u32) {
        self.bitmap_size = Some((device_width, device_height));
    }

    fn set_css_size(&mut self, css_width: f64, css_height: f64) {
        self.css_size = Some((css_width, css_height));
    }

    fn set_context_scale(&mut self, scale: f64) {
        self.context_scale = Some(scale);
    }
}

impl FrameRequester for NullCanvas {
    fn request_frame(&mut self) {
        self.frame_request_count += 1;
    }
}
