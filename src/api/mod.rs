mod adapter;
mod canvas_surface;
mod hover_controller;
mod key_nav_controller;
mod snapshot;
mod viewport_controller;
mod viewport_pan;
mod viewport_zoom;
mod wheel_controller;

pub use adapter::{ChartAdapter, RenderViewport};
pub use canvas_surface::{CanvasSurface, CanvasSurfaceConfig, TooltipState};
pub use snapshot::ViewportSnapshot;
pub use viewport_controller::{ViewportController, ViewportControllerConfig};
pub use wheel_controller::{WheelAction, WheelOutcome};
