use crate::core::PreviewSelection;
use crate::schedule::FrameRequester;

use super::ViewportController;

impl<F: FrameRequester> ViewportController<F> {
    /// Queues a pan by pointer-drag deltas in CSS pixels.
    ///
    /// Deltas follow drag semantics: dragging right (`dx > 0`) moves the
    /// viewport window left, dragging down (`dy > 0`) moves it up. The
    /// horizontal delta is converted to unit space with the viewport length
    /// observed at flush time; the vertical delta applies immediately since
    /// it never touches the preview selection.
    pub fn pan_by(&mut self, dx_css: f64, dy_css: f64) {
        if dy_css.is_finite() && dy_css != 0.0 {
            self.vertical = self.vertical.panned_by(
                -dy_css,
                self.container.height,
                self.content_height,
                self.config.vertical_anchor,
            );
        }

        let visible_width = self.visible_width();
        if !dx_css.is_finite() || dx_css == 0.0 || visible_width <= 0.0 {
            return;
        }

        let committed = self.committed;
        self.enqueue_transform(Box::new(move |viewport| {
            let delta_units = -dx_css * viewport.length() / visible_width;
            let panned = viewport.panned_by_units(delta_units);
            PreviewSelection::from_viewport(panned, committed, true)
        }));
    }
}
