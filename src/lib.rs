//! traceview-rs: interactive viewport and canvas engine for
//! performance-profile timelines.
//!
//! This crate owns the shared interaction machinery behind profile
//! visualizations (stack chart, flame graph, marker chart, tracer chart):
//! a zoomable/pannable unit-interval viewport over a committed time range,
//! frame-batched preview-selection updates, and a canvas surface with a
//! hover/selection/tooltip state machine driven by adapter-supplied hit
//! tests. Pixel-level chart drawing stays with the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod schedule;
pub mod telemetry;

pub use api::{CanvasSurface, CanvasSurfaceConfig, ViewportController, ViewportControllerConfig};
pub use error::{TraceViewError, TraceViewResult};
