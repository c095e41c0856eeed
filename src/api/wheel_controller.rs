use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::interaction::WheelEvent;
use crate::schedule::FrameRequester;

use super::ViewportController;

/// What a wheel event turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelAction {
    Zoom,
    Pan,
    None,
}

/// Result the host must act on after forwarding a wheel event.
///
/// `default_prevented` is `true` for every handled event, including logical
/// no-ops: letting native scrolling interleave with programmatic panning
/// produces visibly inconsistent motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelOutcome {
    pub default_prevented: bool,
    pub action: WheelAction,
}

impl<F: FrameRequester> ViewportController<F> {
    /// Routes a wheel event to zoom (ctrl/shift held) or pan.
    ///
    /// Zoom uses the exponential mapping `zoom_speed ^ delta` around the
    /// pointer's horizontal position, so repeated small deltas compose
    /// multiplicatively. The vertical delta drives the zoom, falling back to
    /// the horizontal delta when `delta_y == 0`.
    pub fn handle_wheel(&mut self, event: WheelEvent) -> WheelOutcome {
        let (dx, dy) = event.normalized_deltas(self.container.height);

        if event.is_zoom_gesture() {
            let delta = if dy != 0.0 { dy } else { dx };
            if delta == 0.0 || !delta.is_finite() {
                return WheelOutcome {
                    default_prevented: true,
                    action: WheelAction::None,
                };
            }

            let factor = self.config.zoom_speed.powf(delta);
            let center = self.pointer_center_fraction(event.offset_x);
            trace!(delta, factor, center, "wheel zoom");
            self.zoom_around_point(center, factor);
            self.schedule_wheel_settle();
            return WheelOutcome {
                default_prevented: true,
                action: WheelAction::Zoom,
            };
        }

        if dx == 0.0 && dy == 0.0 {
            return WheelOutcome {
                default_prevented: true,
                action: WheelAction::None,
            };
        }

        // Wheel scroll moves the window with the scroll direction, which is
        // the inverse of a drag.
        self.pan_by(-dx, -dy);
        self.schedule_wheel_settle();
        WheelOutcome {
            default_prevented: true,
            action: WheelAction::Pan,
        }
    }

    /// Viewport fraction under a container-local CSS x position.
    fn pointer_center_fraction(&self, offset_x: f64) -> f64 {
        let visible_width = self.visible_width();
        if visible_width <= 0.0 || !offset_x.is_finite() {
            return 0.5;
        }
        ((offset_x - self.config.margin_left) / visible_width).clamp(0.0, 1.0)
    }
}
