//! Special-key handling
//!
//! Arrow keys drive the ragdoll through `ragdoll_input::BodyController`;
//! everything else that matters is turned into an [`InputAction`] here.

mod input_mapper;

pub use input_mapper::{InputAction, InputMapper};
