use tracing::trace;

use crate::interaction::{HoverState, PointerButton};
use crate::render::CanvasHandle;
use crate::schedule::FrameRequester;

use super::{CanvasSurface, ChartAdapter, canvas_surface::TooltipState};

impl<A, C> CanvasSurface<A, C>
where
    A: ChartAdapter<C>,
    C: CanvasHandle + FrameRequester,
{
    /// Pointer movement in container-local CSS coordinates.
    ///
    /// Re-runs the adapter hit test and advances the hover machine. With a
    /// sticky selection active only the live highlight updates; the tooltip
    /// stays pinned at the original click.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.last_pointer = Some((x, y));

        if self.drag.is_active() {
            self.drag.track(x, y);
            if !self.drag.is_click()
                && matches!(self.hover, HoverState::Idle | HoverState::Hovering(_))
            {
                self.hover = HoverState::Dragging;
                self.tooltip = None;
                self.schedule_draw(true);
            }
        }

        let hit = self.adapter.hit_test(x, y);
        match self.hover {
            HoverState::Selected(_) => {
                if self.live_highlight != hit {
                    self.live_highlight = hit;
                    self.schedule_draw(true);
                }
            }
            HoverState::Dragging => {}
            HoverState::Idle | HoverState::Hovering(_) => match hit {
                Some(item) => {
                    let changed = self.hover != HoverState::Hovering(item);
                    self.hover = HoverState::Hovering(item);
                    self.tooltip = self.adapter.hovered_item_info(item).map(|content| {
                        TooltipState {
                            x,
                            y,
                            pinned: false,
                            content,
                        }
                    });
                    if changed {
                        self.schedule_draw(true);
                    }
                }
                None => {
                    if self.config.persist_tooltips {
                        return;
                    }
                    if self.hover != HoverState::Idle {
                        self.hover = HoverState::Idle;
                        self.tooltip = None;
                        self.schedule_draw(true);
                    }
                }
            },
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, button: PointerButton) {
        match button {
            PointerButton::Primary => {
                self.drag.begin(x, y);
            }
            // A right-click cannot be a drag-select, so it fires immediately.
            PointerButton::Secondary => {
                let item = self.hovered_item();
                self.adapter.on_right_click(item);
            }
        }
    }

    /// Primary release: a click when total travel stayed below the
    /// threshold in both axes, otherwise a suppressed drag.
    pub fn pointer_up(&mut self, x: f64, y: f64, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }

        if self.drag.is_click() {
            let item = self.hovered_item();
            self.adapter.on_select_item(item);

            match item {
                Some(item) if self.adapter.supports_sticky_tooltips() => {
                    self.hover = HoverState::Selected(item);
                    self.live_highlight = Some(item);
                    self.tooltip =
                        self.adapter
                            .hovered_item_info(item)
                            .map(|content| TooltipState {
                                x,
                                y,
                                pinned: true,
                                content,
                            });
                }
                Some(item) => {
                    self.hover = HoverState::Hovering(item);
                }
                None => {
                    self.hover = HoverState::Idle;
                    self.tooltip = None;
                }
            }
            self.schedule_draw(true);
        } else if self.drag.is_active() {
            trace!("suppressing click after drag");
            if self.hover == HoverState::Dragging {
                self.rederive_hover_at(x, y);
            }
        }

        self.drag.end();
    }

    pub fn double_click(&mut self) {
        if let Some(item) = self.hovered_item() {
            self.adapter.on_double_click_item(item);
        }
    }

    /// Pointer left the canvas entirely.
    pub fn pointer_leave(&mut self) {
        self.last_pointer = None;
        self.drag.end();
        if self.config.persist_tooltips {
            return;
        }
        if self.hover != HoverState::Idle || self.live_highlight.is_some() {
            self.hover = HoverState::Idle;
            self.live_highlight = None;
            self.tooltip = None;
            self.schedule_draw(true);
        }
    }

    /// Upstream tables were replaced (for example by symbolication).
    ///
    /// The hovered item is re-derived at the last known pointer position; a
    /// stale item clears to idle before the next draw rather than surviving
    /// against the new data.
    pub fn notify_data_changed(&mut self) {
        if let Some((x, y)) = self.last_pointer {
            let hit = self.adapter.hit_test(x, y);
            let displayed = match self.hover {
                HoverState::Hovering(item) | HoverState::Selected(item) => Some(item),
                HoverState::Idle | HoverState::Dragging => None,
            };
            if displayed.is_some() && hit != displayed {
                trace!("clearing stale hover after data change");
                self.hover = HoverState::Idle;
                self.live_highlight = None;
                self.tooltip = None;
            } else if self.hover.is_selected() {
                self.live_highlight = hit;
            }
        }
        self.schedule_draw(false);
    }

    fn rederive_hover_at(&mut self, x: f64, y: f64) {
        match self.adapter.hit_test(x, y) {
            Some(item) => self.hover = HoverState::Hovering(item),
            None => self.hover = HoverState::Idle,
        }
        self.schedule_draw(true);
    }
}
