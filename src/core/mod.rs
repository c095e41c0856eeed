pub mod cache;
pub mod geometry;
pub mod hit_regions;
pub mod range;
pub mod types;
pub mod viewport;

pub use cache::{TableVersion, TableVersionCounter, VersionedCache};
pub use hit_regions::{HitRegion, HitRegionList};
pub use range::{CommittedRange, MINIMUM_DURATION, PreviewSelection, SelectionBounds};
pub use types::ContainerSize;
pub use viewport::{HorizontalViewport, VerticalAnchor, VerticalViewport};
