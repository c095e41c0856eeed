use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ContainerSize;
use crate::error::{TraceViewError, TraceViewResult};
use crate::interaction::{DragTracker, HoverState};
use crate::render::{CanvasHandle, DrawScale, HoverDelta};
use crate::schedule::FrameRequester;

use super::ChartAdapter;

/// Behavior switches for one canvas surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CanvasSurfaceConfig {
    /// Scale the drawing context so the adapter draws in CSS units. When
    /// `false` the adapter draws in device pixels and should snap box edges
    /// at device granularity.
    pub scale_ctx_to_css_pixels: bool,
    /// Draw synchronously instead of scheduling; used by tests and
    /// teardown.
    pub draw_immediately: bool,
    /// Debug aid: keep tooltips up when the pointer leaves an item.
    pub persist_tooltips: bool,
}

impl CanvasSurfaceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scale_ctx_to_css_pixels(mut self, enabled: bool) -> Self {
        self.scale_ctx_to_css_pixels = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_immediately(mut self, enabled: bool) -> Self {
        self.draw_immediately = enabled;
        self
    }

    #[must_use]
    pub fn with_persist_tooltips(mut self, enabled: bool) -> Self {
        self.persist_tooltips = enabled;
        self
    }
}

/// Tooltip shown for the hovered or sticky-selected item.
///
/// Coordinates are container-local CSS pixels. An unpinned tooltip follows
/// the pointer; a pinned one stays at the click that selected its item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub x: f64,
    pub y: f64,
    pub pinned: bool,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PendingResize {
    pub(super) container: ContainerSize,
    pub(super) device_pixel_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct AppliedSurface {
    pub(super) container: ContainerSize,
    pub(super) device_pixel_ratio: f64,
}

/// Owns a canvas element's sizing, frame-batched draw scheduling, and the
/// hover/selection/tooltip state machine for one chart view.
///
/// Pixel work and domain meaning live in the [`ChartAdapter`]; the surface
/// guarantees at most one adapter draw per animation frame and keeps hover
/// state consistent with the adapter's hit test.
pub struct CanvasSurface<A, C>
where
    A: ChartAdapter<C>,
    C: CanvasHandle + FrameRequester,
{
    pub(super) adapter: A,
    pub(super) canvas: C,
    pub(super) config: CanvasSurfaceConfig,
    pub(super) hover: HoverState<A::Item>,
    pub(super) live_highlight: Option<A::Item>,
    pub(super) tooltip: Option<TooltipState>,
    pub(super) drag: DragTracker,
    pub(super) last_pointer: Option<(f64, f64)>,
    pub(super) draw_scheduled: bool,
    pub(super) pending_hover_only: bool,
    pub(super) prev_drawn_hover: Option<A::Item>,
    pub(super) pending_resize: Option<PendingResize>,
    pub(super) surface: Option<AppliedSurface>,
    pub(super) draw_count: usize,
}

impl<A, C> CanvasSurface<A, C>
where
    A: ChartAdapter<C>,
    C: CanvasHandle + FrameRequester,
{
    #[must_use]
    pub fn new(adapter: A, canvas: C, config: CanvasSurfaceConfig) -> Self {
        Self {
            adapter,
            canvas,
            config,
            hover: HoverState::Idle,
            live_highlight: None,
            tooltip: None,
            drag: DragTracker::new(),
            last_pointer: None,
            draw_scheduled: false,
            pending_hover_only: false,
            prev_drawn_hover: None,
            pending_resize: None,
            surface: None,
            draw_count: 0,
        }
    }

    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    #[must_use]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    #[must_use]
    pub fn config(&self) -> CanvasSurfaceConfig {
        self.config
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState<A::Item> {
        self.hover
    }

    /// The item currently highlighted for drawing purposes.
    ///
    /// With a sticky selection active this follows the live pointer, not the
    /// selected item.
    #[must_use]
    pub fn hovered_item(&self) -> Option<A::Item> {
        match self.hover {
            HoverState::Hovering(item) => Some(item),
            HoverState::Selected(_) => self.live_highlight,
            HoverState::Idle | HoverState::Dragging => None,
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipState> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Records a container resize from the host's resize notification.
    ///
    /// The bitmap is resized at the top of the next scheduled draw, never
    /// synchronously, so it cannot change mid-frame.
    pub fn notify_resize(
        &mut self,
        css_width: f64,
        css_height: f64,
        device_pixel_ratio: f64,
    ) -> TraceViewResult<()> {
        let container = ContainerSize::new(css_width, css_height);
        if !container.is_valid() {
            return Err(TraceViewError::InvalidContainer {
                width: css_width,
                height: css_height,
            });
        }
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(TraceViewError::InvalidInput(
                "device pixel ratio must be finite and > 0".to_owned(),
            ));
        }

        self.pending_resize = Some(PendingResize {
            container,
            device_pixel_ratio,
        });
        self.schedule_draw(false);
        Ok(())
    }

    /// Schedules a full redraw for the next animation frame.
    pub fn request_draw(&mut self) {
        self.schedule_draw(false);
    }

    /// The host's animation-frame callback.
    pub fn on_animation_frame(&mut self) {
        if self.draw_scheduled {
            self.perform_draw();
        }
    }

    /// At most one draw is in flight at a time; `hover_only` survives only
    /// until a full request joins it.
    pub(super) fn schedule_draw(&mut self, hover_only: bool) {
        if self.draw_scheduled {
            if !hover_only {
                self.pending_hover_only = false;
            }
            return;
        }

        self.draw_scheduled = true;
        self.pending_hover_only = hover_only;
        if self.config.draw_immediately {
            self.perform_draw();
        } else {
            self.canvas.request_frame();
        }
    }

    fn perform_draw(&mut self) {
        self.draw_scheduled = false;
        let hover_only = self.pending_hover_only;
        self.pending_hover_only = false;

        if !self.canvas.is_attached() {
            trace!("skipping draw: canvas not attached");
            return;
        }
        if let Some(resize) = self.pending_resize.take() {
            self.apply_resize(resize);
        }
        let Some(surface) = self.surface else {
            trace!("skipping draw: no size observed yet");
            return;
        };
        if !surface.container.is_drawable() {
            trace!("skipping draw: zero-sized container");
            return;
        }

        let css_to_user = if self.config.scale_ctx_to_css_pixels {
            1.0
        } else {
            surface.device_pixel_ratio
        };
        let scale = DrawScale::new(surface.device_pixel_ratio, css_to_user);

        let hovered = self.hovered_item();
        let hover = HoverDelta {
            hovered_item: hovered,
            prev_hovered_item: self.prev_drawn_hover,
            is_hovered_only_different: hover_only && hovered != self.prev_drawn_hover,
        };

        self.adapter.draw(&mut self.canvas, scale, hover);
        self.prev_drawn_hover = hovered;
        self.draw_count += 1;
    }

    fn apply_resize(&mut self, resize: PendingResize) {
        let device_width = (resize.container.width * resize.device_pixel_ratio).floor() as u32;
        let device_height = (resize.container.height * resize.device_pixel_ratio).floor() as u32;
        self.canvas.set_bitmap_size(device_width, device_height);
        self.canvas
            .set_css_size(resize.container.width, resize.container.height);

        if self.config.scale_ctx_to_css_pixels {
            let ratio_changed = self
                .surface
                .is_none_or(|surface| surface.device_pixel_ratio != resize.device_pixel_ratio);
            if ratio_changed {
                self.canvas.set_context_scale(resize.device_pixel_ratio);
            }
        }

        self.surface = Some(AppliedSurface {
            container: resize.container,
            device_pixel_ratio: resize.device_pixel_ratio,
        });
    }
}
