use crate::interaction::NavigationKeys;
use crate::schedule::FrameRequester;

use super::ViewportController;

impl<F: FrameRequester> ViewportController<F> {
    /// Advances keyboard navigation by one animation frame.
    ///
    /// Travel per frame is `key_nav_speed * elapsed_ms`, capped at
    /// `max_key_frame_delta` so a long jank pause cannot cause a
    /// disorienting jump. Frames keep being requested only while a
    /// navigation key is held; releasing the last key settles the selection.
    pub fn step_key_navigation(&mut self, keys: NavigationKeys, timestamp_ms: f64) {
        if !keys.any() {
            if self.key_nav_last_frame_ms.take().is_some() {
                self.settle_selection();
            }
            return;
        }

        let elapsed_ms = match self.key_nav_last_frame_ms {
            Some(previous) => (timestamp_ms - previous).max(0.0),
            None => 0.0,
        };
        self.key_nav_last_frame_ms = Some(timestamp_ms);

        let delta = (self.config.key_nav_speed * elapsed_ms).min(self.config.max_key_frame_delta);
        if delta > 0.0 {
            if keys.zoom_in {
                self.zoom_around_point(0.5, self.config.zoom_speed.powf(-delta));
            }
            if keys.zoom_out {
                self.zoom_around_point(0.5, self.config.zoom_speed.powf(delta));
            }

            let mut dx = 0.0;
            let mut dy = 0.0;
            if keys.left {
                dx += delta;
            }
            if keys.right {
                dx -= delta;
            }
            if keys.up {
                dy += delta;
            }
            if keys.down {
                dy -= delta;
            }
            if dx != 0.0 || dy != 0.0 {
                self.pan_by(dx, dy);
            }
        }

        // Keep stepping on the next frame while keys are held.
        self.frames.request_frame();
    }
}
