//! Animation-frame scheduling primitives.
//!
//! There is no thread parallelism anywhere in this crate: "scheduling" means
//! deferring and coalescing work onto the host's next animation-frame
//! callback. Hosts implement [`FrameRequester`] against their real frame
//! callback (requestAnimationFrame, a compositor vsync, a test loop).

mod batcher;

pub use batcher::{FlushSchedule, PendingViewportTransform, PreviewSelectionBatcher};

/// Host hook for animation-frame callbacks.
///
/// Multiple requests issued before the next callback must coalesce into one
/// invocation; implementations are expected to be cheap and idempotent.
pub trait FrameRequester {
    fn request_frame(&mut self);
}

/// Headless requester for tests and teardown paths.
///
/// It only counts requests; the test drives the frame callback by hand.
#[derive(Debug, Default)]
pub struct ManualFrames {
    pub request_count: usize,
}

impl ManualFrames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameRequester for ManualFrames {
    fn request_frame(&mut self) {
        self.request_count += 1;
    }
}

/// One generation of frame-deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic counter superseding stale deferred callbacks.
///
/// A deferred transition (for example "settle the selection two frames after
/// the last wheel event") records the generation it was scheduled under; if a
/// newer request bumps the counter first, the stale callback observes the
/// mismatch and must no-op.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, superseding all earlier ones.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}

/// Outcome of ticking a [`DeferredAction`] on a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTick {
    /// A newer generation superseded this action; drop it.
    Superseded,
    /// Still waiting for its frame delay to elapse.
    Pending,
    /// The delay elapsed in the current generation; run the action now.
    Fire,
}

/// An action delayed by a fixed number of frames, cancellable by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredAction {
    generation: Generation,
    frames_remaining: u32,
}

impl DeferredAction {
    #[must_use]
    pub fn new(generation: Generation, delay_frames: u32) -> Self {
        Self {
            generation,
            frames_remaining: delay_frames,
        }
    }

    pub fn tick(&mut self, counter: &GenerationCounter) -> DeferredTick {
        if !counter.is_current(self.generation) {
            return DeferredTick::Superseded;
        }
        if self.frames_remaining > 0 {
            self.frames_remaining -= 1;
            return DeferredTick::Pending;
        }
        DeferredTick::Fire
    }
}
