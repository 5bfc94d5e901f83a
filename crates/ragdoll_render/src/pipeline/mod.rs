//! Rendering pipeline components
//!
//! A single line-list pipeline is enough to draw the physics debug view.

pub mod line_pipeline;
pub mod types;

pub use line_pipeline::LinePipeline;
pub use types::{CameraUniforms, LineVertex, INITIAL_LINE_VERTICES};
