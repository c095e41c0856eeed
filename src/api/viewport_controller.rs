use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    CommittedRange, ContainerSize, HorizontalViewport, PreviewSelection, VerticalAnchor,
    VerticalViewport,
};
use crate::error::{TraceViewError, TraceViewResult};
use crate::interaction::NavigationKeys;
use crate::schedule::{
    DeferredAction, DeferredTick, FlushSchedule, FrameRequester, GenerationCounter,
    PendingViewportTransform, PreviewSelectionBatcher,
};

use super::RenderViewport;

/// Tuning for one chart view's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportControllerConfig {
    /// Lower bound on viewport length, as a unit fraction. Derived from the
    /// profile's sample interval so users cannot zoom past meaningful
    /// resolution.
    pub maximum_zoom: f64,
    /// Base of the exponential wheel-zoom mapping, per normalized delta
    /// pixel.
    pub zoom_speed: f64,
    /// Keyboard navigation speed in CSS pixels per millisecond.
    pub key_nav_speed: f64,
    /// Per-frame cap on keyboard travel, in CSS pixels. Bounds the jump
    /// after a long jank pause.
    pub max_key_frame_delta: f64,
    /// Fixed chrome to the left/right of the drawn area, in CSS pixels.
    pub margin_left: f64,
    pub margin_right: f64,
    /// Where short content sits vertically.
    pub vertical_anchor: VerticalAnchor,
    /// Frames of wheel silence before an active selection settles.
    pub wheel_settle_frame_delay: u32,
}

impl ViewportControllerConfig {
    pub const DEFAULT_ZOOM_SPEED: f64 = 1.003;
    pub const DEFAULT_KEY_NAV_SPEED: f64 = 0.5;
    pub const DEFAULT_MAX_KEY_FRAME_DELTA: f64 = 150.0;
    pub const DEFAULT_WHEEL_SETTLE_FRAME_DELAY: u32 = 2;

    #[must_use]
    pub fn new(maximum_zoom: f64) -> Self {
        Self {
            maximum_zoom,
            zoom_speed: Self::DEFAULT_ZOOM_SPEED,
            key_nav_speed: Self::DEFAULT_KEY_NAV_SPEED,
            max_key_frame_delta: Self::DEFAULT_MAX_KEY_FRAME_DELTA,
            margin_left: 0.0,
            margin_right: 0.0,
            vertical_anchor: VerticalAnchor::Top,
            wheel_settle_frame_delay: Self::DEFAULT_WHEEL_SETTLE_FRAME_DELAY,
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margin_left: f64, margin_right: f64) -> Self {
        self.margin_left = margin_left;
        self.margin_right = margin_right;
        self
    }

    #[must_use]
    pub fn with_vertical_anchor(mut self, anchor: VerticalAnchor) -> Self {
        self.vertical_anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_zoom_speed(mut self, zoom_speed: f64) -> Self {
        self.zoom_speed = zoom_speed;
        self
    }

    #[must_use]
    pub fn with_key_nav(mut self, speed: f64, max_frame_delta: f64) -> Self {
        self.key_nav_speed = speed;
        self.max_key_frame_delta = max_frame_delta;
        self
    }

    fn validate(self) -> TraceViewResult<Self> {
        if !self.maximum_zoom.is_finite() || self.maximum_zoom <= 0.0 || self.maximum_zoom > 1.0 {
            return Err(TraceViewError::InvalidInput(
                "maximum zoom must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !self.zoom_speed.is_finite() || self.zoom_speed <= 1.0 {
            return Err(TraceViewError::InvalidInput(
                "zoom speed must be finite and > 1".to_owned(),
            ));
        }
        if !self.key_nav_speed.is_finite()
            || self.key_nav_speed <= 0.0
            || !self.max_key_frame_delta.is_finite()
            || self.max_key_frame_delta <= 0.0
        {
            return Err(TraceViewError::InvalidInput(
                "keyboard navigation speed and frame cap must be finite and > 0".to_owned(),
            ));
        }
        if !self.margin_left.is_finite()
            || !self.margin_right.is_finite()
            || self.margin_left < 0.0
            || self.margin_right < 0.0
        {
            return Err(TraceViewError::InvalidInput(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Owns one chart view's committed range, preview selection, and viewport
/// bounds, and turns input events into frame-batched selection updates.
///
/// Constructed per chart view and passed by reference to the rendering
/// routine; there is no ambient global state.
pub struct ViewportController<F: FrameRequester> {
    pub(super) config: ViewportControllerConfig,
    pub(super) frames: F,
    pub(super) committed: CommittedRange,
    pub(super) selection: PreviewSelection,
    pub(super) vertical: VerticalViewport,
    pub(super) container: ContainerSize,
    pub(super) content_height: f64,
    pub(super) is_size_set: bool,
    pub(super) is_dragging: bool,
    pub(super) batcher: PreviewSelectionBatcher,
    pub(super) settle_generations: GenerationCounter,
    pub(super) pending_settle: Option<DeferredAction>,
    pub(super) settle_after_flush: bool,
    pub(super) key_nav_last_frame_ms: Option<f64>,
}

impl<F: FrameRequester> ViewportController<F> {
    pub fn new(
        frames: F,
        committed: CommittedRange,
        config: ViewportControllerConfig,
    ) -> TraceViewResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            frames,
            committed,
            selection: PreviewSelection::NoSelection,
            vertical: VerticalViewport::new(0.0),
            container: ContainerSize::zero(),
            content_height: 0.0,
            is_size_set: false,
            is_dragging: false,
            batcher: PreviewSelectionBatcher::new(),
            settle_generations: GenerationCounter::new(),
            pending_settle: None,
            settle_after_flush: false,
            key_nav_last_frame_ms: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> ViewportControllerConfig {
        self.config
    }

    #[must_use]
    pub fn committed_range(&self) -> CommittedRange {
        self.committed
    }

    #[must_use]
    pub fn preview_selection(&self) -> PreviewSelection {
        self.selection
    }

    #[must_use]
    pub fn horizontal_viewport(&self) -> HorizontalViewport {
        self.selection.horizontal_viewport(self.committed)
    }

    #[must_use]
    pub fn vertical_viewport(&self) -> VerticalViewport {
        self.vertical
    }

    #[must_use]
    pub fn container_size(&self) -> ContainerSize {
        self.container
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn is_size_set(&self) -> bool {
        self.is_size_set
    }

    #[must_use]
    pub fn has_pending_transforms(&self) -> bool {
        self.batcher.has_pending()
    }

    /// The host frame hook, exposed so embedders (and tests) can observe
    /// coalesced frame requests.
    #[must_use]
    pub fn frame_requester(&self) -> &F {
        &self.frames
    }

    /// CSS width of the drawn area, excluding margins.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        (self.container.width - self.config.margin_left - self.config.margin_right).max(0.0)
    }

    #[must_use]
    pub fn render_viewport(&self) -> RenderViewport {
        let horizontal = self.horizontal_viewport();
        RenderViewport {
            container_width: self.container.width,
            container_height: self.container.height,
            viewport_left: horizontal.left(),
            viewport_right: horizontal.right(),
            viewport_top: self.vertical.top(),
            viewport_bottom: self.vertical.bottom(),
            is_dragging: self.is_dragging,
            is_size_set: self.is_size_set,
        }
    }

    /// Records the container's rendered size from the host's resize
    /// notification.
    pub fn set_container_size(&mut self, width: f64, height: f64) -> TraceViewResult<()> {
        let container = ContainerSize::new(width, height);
        if !container.is_valid() {
            return Err(TraceViewError::InvalidContainer { width, height });
        }
        self.container = container;
        self.is_size_set = true;
        self.vertical = self.vertical.clamped(
            self.container.height,
            self.content_height,
            self.config.vertical_anchor,
        );
        Ok(())
    }

    /// Updates the chart content height (rows can appear or collapse).
    pub fn set_content_height(&mut self, content_height: f64) {
        self.content_height = content_height.max(0.0);
        self.vertical = self.vertical.clamped(
            self.container.height,
            self.content_height,
            self.config.vertical_anchor,
        );
    }

    /// Replaces the preview selection from outside the controller (for
    /// example, a selection scrubber shared with other views). Pending
    /// transforms are dropped: they were built against the superseded
    /// selection.
    pub fn replace_preview_selection(&mut self, selection: PreviewSelection) {
        self.batcher.clear();
        self.settle_after_flush = false;
        self.selection = selection;
    }

    /// Marks the active selection settled, after any pending transforms.
    pub fn settle_selection(&mut self) {
        if self.batcher.has_pending() {
            self.settle_after_flush = true;
        } else {
            self.selection = self.selection.settled();
        }
    }

    /// Marks the start/end of a viewport drag (middle of a pan gesture).
    pub fn begin_pan_drag(&mut self) {
        self.is_dragging = true;
    }

    pub fn end_pan_drag(&mut self) {
        self.is_dragging = false;
        self.settle_selection();
    }

    /// Replaces the committed range with the current preview selection and
    /// resets the selection.
    ///
    /// Returns `false` when there is no selection to commit.
    pub fn commit_selection_as_range(&mut self) -> TraceViewResult<bool> {
        let Some(bounds) = self.selection.bounds() else {
            return Ok(false);
        };

        self.committed = CommittedRange::new(bounds.start, bounds.end)?;
        self.selection = PreviewSelection::NoSelection;
        self.batcher.clear();
        self.settle_after_flush = false;
        self.pending_settle = None;
        debug!(
            start = self.committed.start(),
            end = self.committed.end(),
            "committed preview selection as range"
        );
        Ok(true)
    }

    /// Queues a viewport transform and requests a frame when the queue was
    /// empty.
    pub(super) fn enqueue_transform(&mut self, transform: PendingViewportTransform) {
        match self.batcher.enqueue(transform) {
            FlushSchedule::ScheduleFlush => self.frames.request_frame(),
            FlushSchedule::AlreadyScheduled => {}
        }
    }

    /// Folds all pending transforms into one selection update.
    ///
    /// Returns `true` when the selection changed.
    pub fn flush_pending_transforms(&mut self) -> bool {
        let Some(mut next) = self.batcher.flush_if_pending(self.committed, self.selection) else {
            return false;
        };
        if self.settle_after_flush {
            self.settle_after_flush = false;
            next = next.settled();
        }
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    /// Per-frame entry point: folds pending transforms, steps keyboard
    /// navigation, and advances the deferred wheel settle.
    ///
    /// Returns `true` when the selection or viewport changed and the host
    /// should re-render.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64, keys: NavigationKeys) -> bool {
        let mut changed = self.flush_pending_transforms();
        changed |= self.tick_pending_settle();
        self.step_key_navigation(keys, timestamp_ms);
        if self.batcher.has_pending() || self.pending_settle.is_some() {
            self.frames.request_frame();
        }
        changed
    }

    fn tick_pending_settle(&mut self) -> bool {
        let Some(mut action) = self.pending_settle else {
            return false;
        };
        match action.tick(&self.settle_generations) {
            DeferredTick::Superseded => {
                self.pending_settle = None;
                false
            }
            DeferredTick::Pending => {
                self.pending_settle = Some(action);
                false
            }
            DeferredTick::Fire => {
                self.pending_settle = None;
                let was_modifying = self.selection.is_modifying();
                self.settle_selection();
                was_modifying
            }
        }
    }

    /// Schedules a selection settle a few frames out; a newer wheel event
    /// supersedes it through the generation counter.
    pub(super) fn schedule_wheel_settle(&mut self) {
        let generation = self.settle_generations.begin();
        self.pending_settle = Some(DeferredAction::new(
            generation,
            self.config.wheel_settle_frame_delay,
        ));
        self.frames.request_frame();
    }
}
