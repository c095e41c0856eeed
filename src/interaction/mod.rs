use serde::{Deserialize, Serialize};

/// Pointer movement below this threshold, in both axes, still counts as a
/// click on release.
pub const CLICK_MOVEMENT_THRESHOLD_CSS: f64 = 5.0;

/// Hover/selection state of a canvas surface.
///
/// `Selected` is the sticky post-click state: the tooltip stays pinned at the
/// click position while the live highlight keeps following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverState<T> {
    Idle,
    Hovering(T),
    Selected(T),
    Dragging,
}

impl<T> Default for HoverState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T: Copy + PartialEq> HoverState<T> {
    #[must_use]
    pub fn item(self) -> Option<T> {
        match self {
            Self::Hovering(item) | Self::Selected(item) => Some(item),
            Self::Idle | Self::Dragging => None,
        }
    }

    #[must_use]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging)
    }
}

/// Tracks pointer travel between press and release to distinguish clicks
/// from drags.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    origin: Option<(f64, f64)>,
    threshold_exceeded: bool,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
        self.threshold_exceeded = false;
    }

    /// Records pointer movement; the exceeded flag latches until the next
    /// `begin`.
    pub fn track(&mut self, x: f64, y: f64) {
        let Some((origin_x, origin_y)) = self.origin else {
            return;
        };
        if (x - origin_x).abs() >= CLICK_MOVEMENT_THRESHOLD_CSS
            || (y - origin_y).abs() >= CLICK_MOVEMENT_THRESHOLD_CSS
        {
            self.threshold_exceeded = true;
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.origin.is_some()
    }

    /// `true` when movement since `begin` stayed below the click threshold.
    #[must_use]
    pub fn is_click(self) -> bool {
        self.origin.is_some() && !self.threshold_exceeded
    }

    pub fn end(&mut self) {
        self.origin = None;
        self.threshold_exceeded = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Wheel delta granularity as reported by the host's event system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// CSS pixels per line-mode wheel notch.
const LINE_DELTA_PX: f64 = 16.0;

/// Wheel input with modifier state, in container-local CSS coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_mode: WheelDeltaMode,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl WheelEvent {
    /// Normalizes deltas to CSS pixels across pixel/line/page modes.
    #[must_use]
    pub fn normalized_deltas(&self, page_height: f64) -> (f64, f64) {
        let scale = match self.delta_mode {
            WheelDeltaMode::Pixel => 1.0,
            WheelDeltaMode::Line => LINE_DELTA_PX,
            WheelDeltaMode::Page => page_height.max(LINE_DELTA_PX),
        };
        (self.delta_x * scale, self.delta_y * scale)
    }

    #[must_use]
    pub fn is_zoom_gesture(&self) -> bool {
        self.ctrl_key || self.shift_key
    }
}

/// Navigation keys currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationKeys {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl NavigationKeys {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn any(self) -> bool {
        self.zoom_in || self.zoom_out || self.up || self.down || self.left || self.right
    }
}
