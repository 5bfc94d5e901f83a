//! 2D debug rendering for the ragdoll demo
//!
//! This crate provides the wgpu-based line renderer that draws the physics
//! world's debug view.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera2d::Camera2D`] - Visible world rectangle and its projection
//! - [`pipeline::LinePipeline`] - Line-list render pipeline
//! - [`debug_draw::DebugDrawer`] - Turns the physics world into line geometry

pub mod camera2d;
pub mod context;
pub mod debug_draw;
pub mod pipeline;

pub use camera2d::Camera2D;
pub use debug_draw::{hsla_to_rgba, DebugDrawFlags, DebugDrawer, DebugLines};
