//! Rectangle index for adapter hit tests.
//!
//! Adapters rebuild the list while drawing and query it from `hit_test`.
//! Lookup favors the most recently pushed region, matching paint order.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// One drawn box and the domain item it represents, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion<T> {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub item: T,
}

impl<T: Copy> HitRegion<T> {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64, item: T) -> Self {
        Self {
            left,
            top,
            width,
            height,
            item,
        }
    }

    /// Containment is half-open so adjacent boxes never both claim an edge.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    fn horizontal_distance(&self, x: f64) -> f64 {
        if x < self.left {
            self.left - x
        } else if x > self.left + self.width {
            x - (self.left + self.width)
        } else {
            0.0
        }
    }

    fn vertical_band_contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Default)]
pub struct HitRegionList<T> {
    regions: Vec<HitRegion<T>>,
}

impl<T: Copy> HitRegionList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: HitRegion<T>) {
        self.regions.push(region);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the item of the topmost region containing `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<T> {
        self.regions
            .iter()
            .rev()
            .find(|region| region.contains(x, y))
            .map(|region| region.item)
    }

    /// Nearest item in the row band containing `y`, within `max_distance`
    /// CSS pixels horizontally.
    ///
    /// Useful for sparse rows (marker instants, tracer events) where exact
    /// containment would make thin boxes impossible to hover.
    #[must_use]
    pub fn nearest_in_band(&self, x: f64, y: f64, max_distance: f64) -> Option<T> {
        let mut candidates: SmallVec<[(OrderedFloat<f64>, T); 2]> = SmallVec::new();

        for region in self.regions.iter().rev() {
            if !region.vertical_band_contains(y) {
                continue;
            }
            let distance = region.horizontal_distance(x);
            if distance <= max_distance {
                candidates.push((OrderedFloat(distance), region.item));
            }
        }

        candidates
            .into_iter()
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, item)| item)
    }
}
