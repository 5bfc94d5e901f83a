//! Scene construction utilities
//!
//! This module provides a declarative API for building the ragdoll scene.

mod scene_builder;

pub use scene_builder::{Arena, Ragdoll, Scene, SceneBuilder};
