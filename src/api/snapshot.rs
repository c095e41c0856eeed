use serde::{Deserialize, Serialize};

use crate::core::PreviewSelection;
use crate::error::{TraceViewError, TraceViewResult};
use crate::schedule::FrameRequester;

use super::ViewportController;

/// Serializable snapshot of a controller's viewport state for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub committed_start: f64,
    pub committed_end: f64,
    pub preview_selection: PreviewSelection,
    pub viewport_left: f64,
    pub viewport_right: f64,
    pub viewport_top: f64,
    pub viewport_bottom: f64,
    pub container_width: f64,
    pub container_height: f64,
    pub is_dragging: bool,
    pub is_size_set: bool,
    pub has_pending_transforms: bool,
}

impl<F: FrameRequester> ViewportController<F> {
    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        let horizontal = self.horizontal_viewport();
        ViewportSnapshot {
            committed_start: self.committed.start(),
            committed_end: self.committed.end(),
            preview_selection: self.selection,
            viewport_left: horizontal.left(),
            viewport_right: horizontal.right(),
            viewport_top: self.vertical.top(),
            viewport_bottom: self.vertical.bottom(),
            container_width: self.container.width,
            container_height: self.container.height,
            is_dragging: self.is_dragging,
            is_size_set: self.is_size_set,
            has_pending_transforms: self.batcher.has_pending(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> TraceViewResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| TraceViewError::InvalidInput(err.to_string()))
    }
}
