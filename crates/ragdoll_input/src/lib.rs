//! Keyboard input for the ragdoll demo
//!
//! This crate turns held arrow keys into a velocity for the controlled body.

mod body_controller;

pub use body_controller::{BodyController, Direction, DEFAULT_CONTROL_SPEED};
