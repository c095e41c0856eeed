use tracing::warn;

use crate::core::PreviewSelection;
use crate::schedule::FrameRequester;

use super::ViewportController;

impl<F: FrameRequester> ViewportController<F> {
    /// Queues a zoom that keeps the point at viewport fraction `center`
    /// fixed.
    ///
    /// Conventions:
    /// - `factor > 1` lengthens the viewport (zoom out)
    /// - `factor < 1` shortens it, clamped at the configured `maximum_zoom`
    /// - `factor == 1` is a no-op and queues nothing
    ///
    /// The transform is applied on the next animation frame, folded with any
    /// other transforms queued in the same frame.
    pub fn zoom_around_point(&mut self, center: f64, factor: f64) {
        if factor == 1.0 {
            return;
        }
        if !factor.is_finite() || factor <= 0.0 || !center.is_finite() {
            warn!(center, factor, "ignoring degenerate zoom request");
            return;
        }

        let committed = self.committed;
        let maximum_zoom = self.config.maximum_zoom;
        self.enqueue_transform(Box::new(move |viewport| {
            let zoomed = viewport.zoomed_around(center, factor, maximum_zoom);
            PreviewSelection::from_viewport(zoomed, committed, true)
        }));
    }
}
