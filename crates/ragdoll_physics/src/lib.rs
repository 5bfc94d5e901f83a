//! 2D physics for the ragdoll demo
//!
//! A thin layer over `rapier2d` that provides:
//! - Box2D-style body helpers (static/dynamic rectangles, circles)
//! - Fixture materials (density, friction, restitution)
//! - Revolute joints defined by a world-space anchor
//! - Fixed-timestep stepping and debug rendering hooks

pub mod joint;
pub mod material;
pub mod world;

// Re-export rapier so downstream crates share one version of its types.
pub use rapier2d;

pub use joint::RevoluteJointDef;
pub use material::PhysicsMaterial;
pub use world::{PhysicsConfig, PhysicsWorld};

/// Handle to a rigid body in a [`PhysicsWorld`]
pub type BodyHandle = rapier2d::dynamics::RigidBodyHandle;
/// Handle to a joint in a [`PhysicsWorld`]
pub type JointHandle = rapier2d::dynamics::ImpulseJointHandle;
