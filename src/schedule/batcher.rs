use smallvec::SmallVec;

use crate::core::range::{CommittedRange, PreviewSelection};
use crate::core::viewport::HorizontalViewport;

/// Queued viewport mutation: maps the viewport at flush time to the next
/// preview selection.
pub type PendingViewportTransform = Box<dyn FnOnce(HorizontalViewport) -> PreviewSelection>;

/// Instruction returned by [`PreviewSelectionBatcher::enqueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the caller owns frame scheduling and must act on ScheduleFlush"]
pub enum FlushSchedule {
    /// The queue was empty: schedule exactly one flush on the next
    /// animation frame.
    ScheduleFlush,
    /// A flush is already scheduled for this frame.
    AlreadyScheduled,
}

/// Coalesces viewport-mutation requests arising within one animation frame
/// into a single state transition.
///
/// Wheel and mousemove events can fire many times per frame; folding their
/// transforms here means at most one downstream store update per frame, with
/// each transform observing the cumulative effect of the ones enqueued
/// before it.
#[derive(Default)]
pub struct PreviewSelectionBatcher {
    queue: SmallVec<[PendingViewportTransform; 4]>,
}

impl PreviewSelectionBatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform, reporting whether the caller must schedule a
    /// flush for the next animation frame.
    pub fn enqueue(&mut self, transform: PendingViewportTransform) -> FlushSchedule {
        let was_empty = self.queue.is_empty();
        self.queue.push(transform);
        if was_empty {
            FlushSchedule::ScheduleFlush
        } else {
            FlushSchedule::AlreadyScheduled
        }
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Folds the queue in submission order over the *current* selection and
    /// returns the single resulting selection, or `None` when nothing was
    /// pending.
    ///
    /// Each transform sees the horizontal viewport derived from its
    /// predecessor's output, so the fold result equals sequential
    /// application outside the batcher.
    pub fn flush_if_pending(
        &mut self,
        committed: CommittedRange,
        current: PreviewSelection,
    ) -> Option<PreviewSelection> {
        if self.queue.is_empty() {
            return None;
        }

        let mut selection = current;
        for transform in self.queue.drain(..) {
            let viewport = selection.horizontal_viewport(committed);
            selection = transform(viewport);
        }
        Some(selection)
    }

    /// Drops all pending transforms, e.g. when the committed range they were
    /// built against is being replaced.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl std::fmt::Debug for PreviewSelectionBatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewSelectionBatcher")
            .field("pending", &self.queue.len())
            .finish()
    }
}
