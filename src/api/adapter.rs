use serde::{Deserialize, Serialize};

use crate::render::{CanvasHandle, DrawScale, HoverDelta};

/// Render-time viewport snapshot handed to chart adapters.
///
/// Horizontal bounds are unit fractions of the committed range, vertical
/// bounds CSS pixels. `is_size_set` is `false` until the first container
/// resize notification arrives; adapters should not lay out before then.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderViewport {
    pub container_width: f64,
    pub container_height: f64,
    pub viewport_left: f64,
    pub viewport_right: f64,
    pub viewport_top: f64,
    pub viewport_bottom: f64,
    pub is_dragging: bool,
    pub is_size_set: bool,
}

/// Per-chart plug-in point consumed by [`CanvasSurface`].
///
/// One adapter exists per chart view (stack chart, flame graph, marker
/// chart, tracer chart). The surface owns scheduling and interaction state;
/// the adapter owns pixels and domain meaning.
///
/// [`CanvasSurface`]: crate::api::CanvasSurface
pub trait ChartAdapter<C: CanvasHandle> {
    /// Opaque domain item resolved by hit tests: a call-node index, a marker
    /// index, a tracer event index.
    type Item: Copy + PartialEq + std::fmt::Debug;

    /// Draws one frame. Invoked at most once per animation frame.
    ///
    /// When `hover.is_hovered_only_different` is set, only the hovered item
    /// changed since the previous draw and adapters may redraw partially.
    fn draw(&mut self, canvas: &mut C, scale: DrawScale, hover: HoverDelta<Self::Item>);

    /// Maps container-local CSS coordinates to a domain item.
    ///
    /// Panics raised here propagate to the caller; the surface does not mask
    /// adapter bugs.
    fn hit_test(&self, x_css: f64, y_css: f64) -> Option<Self::Item>;

    /// Opts the chart into click-pinned tooltips.
    fn supports_sticky_tooltips(&self) -> bool {
        false
    }

    /// Tooltip content for a hovered item; `None` suppresses the tooltip.
    fn hovered_item_info(&self, _item: Self::Item) -> Option<String> {
        None
    }

    /// A primary click resolved below the drag threshold. `None` means the
    /// click landed on empty space and clears any selection.
    fn on_select_item(&mut self, _item: Option<Self::Item>) {}

    /// A secondary press; fired immediately, with no drag threshold.
    fn on_right_click(&mut self, _item: Option<Self::Item>) {}

    fn on_double_click_item(&mut self, _item: Self::Item) {}
}
