use serde::{Deserialize, Serialize};

use crate::core::viewport::HorizontalViewport;
use crate::error::{TraceViewError, TraceViewResult};

/// Smallest duration substituted for a degenerate range before division.
///
/// Profile times are milliseconds, so this is far below one sample interval.
pub const MINIMUM_DURATION: f64 = 1e-9;

/// Outer, stable time bound of a view: "fully zoomed out".
///
/// Replaced wholesale when the user commits a preview selection; otherwise
/// immutable for the lifetime of a view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommittedRange {
    start: f64,
    end: f64,
}

impl CommittedRange {
    pub fn new(start: f64, end: f64) -> TraceViewResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TraceViewError::InvalidInput(
                "committed range bounds must be finite".to_owned(),
            ));
        }

        Ok(Self {
            start: start.min(end),
            end: start.max(end),
        })
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Duration clamped away from zero so callers can divide by it.
    #[must_use]
    pub fn safe_duration(self) -> f64 {
        self.duration().max(MINIMUM_DURATION)
    }

    /// Fraction of this range at `time`. Not clamped to `[0, 1]`.
    ///
    /// A zero-width range maps every time to `0.0` instead of dividing by zero.
    #[must_use]
    pub fn unit_of_time(self, time: f64) -> f64 {
        if self.duration() <= 0.0 {
            return 0.0;
        }
        (time - self.start) / self.duration()
    }

    #[must_use]
    pub fn time_of_unit(self, unit: f64) -> f64 {
        self.start + unit * self.duration()
    }

    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Bounds of an in-progress or settled preview selection, in domain time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub start: f64,
    pub end: f64,
    /// `true` while the selection is actively being dragged or zoomed.
    pub is_modifying: bool,
}

/// Transient sub-range overlay inside the committed range.
///
/// Used while dragging or zooming before a commit replaces the committed
/// range itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PreviewSelection {
    NoSelection,
    Range(SelectionBounds),
}

impl Default for PreviewSelection {
    fn default() -> Self {
        Self::NoSelection
    }
}

impl PreviewSelection {
    #[must_use]
    pub fn range(start: f64, end: f64, is_modifying: bool) -> Self {
        Self::Range(SelectionBounds {
            start: start.min(end),
            end: start.max(end),
            is_modifying,
        })
    }

    #[must_use]
    pub fn has_selection(self) -> bool {
        matches!(self, Self::Range(_))
    }

    #[must_use]
    pub fn bounds(self) -> Option<SelectionBounds> {
        match self {
            Self::NoSelection => None,
            Self::Range(bounds) => Some(bounds),
        }
    }

    #[must_use]
    pub fn is_modifying(self) -> bool {
        matches!(self, Self::Range(SelectionBounds { is_modifying: true, .. }))
    }

    /// Marks an active selection as settled (mouse released, wheel idle).
    #[must_use]
    pub fn settled(self) -> Self {
        match self {
            Self::NoSelection => Self::NoSelection,
            Self::Range(bounds) => Self::Range(SelectionBounds {
                is_modifying: false,
                ..bounds
            }),
        }
    }

    /// Derives the visible unit-interval slice of `committed`.
    ///
    /// `NoSelection` means fully zoomed out.
    #[must_use]
    pub fn horizontal_viewport(self, committed: CommittedRange) -> HorizontalViewport {
        match self {
            Self::NoSelection => HorizontalViewport::full(),
            Self::Range(bounds) => HorizontalViewport::new(
                committed.unit_of_time(bounds.start).clamp(0.0, 1.0),
                committed.unit_of_time(bounds.end).clamp(0.0, 1.0),
            ),
        }
    }

    /// Inverse of [`Self::horizontal_viewport`]: a full viewport collapses
    /// back to `NoSelection`.
    #[must_use]
    pub fn from_viewport(
        viewport: HorizontalViewport,
        committed: CommittedRange,
        is_modifying: bool,
    ) -> Self {
        if viewport.is_full() {
            return Self::NoSelection;
        }
        Self::range(
            committed.time_of_unit(viewport.left()),
            committed.time_of_unit(viewport.right()),
            is_modifying,
        )
    }
}
