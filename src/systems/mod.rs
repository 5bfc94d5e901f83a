//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod frame_limiter;
mod render;
mod simulation;
mod window;

pub use frame_limiter::FrameLimiter;
pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
