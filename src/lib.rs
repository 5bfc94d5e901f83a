//! Ragdoll 2D
//!
//! A small physics demo: a ragdoll in a walled box, stepped by rapier2d and
//! drawn through its debug render pipeline. The binary in `main.rs` wires
//! these modules to a winit event loop.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
