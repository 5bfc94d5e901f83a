//! Physics world and simulation

use std::num::NonZeroUsize;

use rapier2d::pipeline::{DebugRenderBackend, DebugRenderPipeline};
use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::joint::RevoluteJointDef;
use crate::material::PhysicsMaterial;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity acceleration (positive y points down the screen)
    pub gravity: [f32; 2],
    /// Fixed timestep in seconds
    pub timestep: f32,
    /// Constraint solver iterations per step
    pub solver_iterations: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, 9.8],
            timestep: 1.0 / 60.0,
            solver_iterations: 8,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity and default stepping
    pub fn new(gravity: [f32; 2]) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Builder: set the fixed timestep from a target rate in Hz
    pub fn with_rate(mut self, hz: u32) -> Self {
        self.timestep = 1.0 / hz.max(1) as f32;
        self
    }

    /// Builder: set solver iterations (at least one)
    pub fn with_solver_iterations(mut self, iterations: usize) -> Self {
        self.solver_iterations = iterations.max(1);
        self
    }

    fn integration_parameters(&self) -> IntegrationParameters {
        let mut params = IntegrationParameters::default();
        params.dt = self.timestep;
        params.num_solver_iterations =
            NonZeroUsize::new(self.solver_iterations).unwrap_or(NonZeroUsize::MIN);
        params
    }
}

/// The physics world containing all rigid bodies, colliders and joints
///
/// Owns every rapier structure needed to step a simulation. Bodies are
/// addressed through rapier's generational [`RigidBodyHandle`]s, so stale
/// handles resolve to `None` instead of aliasing a reused slot.
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    gravity: Vector<Real>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            pipeline: PhysicsPipeline::new(),
            integration_parameters: config.integration_parameters(),
            gravity: vector![config.gravity[0], config.gravity[1]],
            config,
        }
    }

    /// Add a fixed rectangle of `width` x `height` centred at `center`
    pub fn add_static_rect(&mut self, width: f32, height: f32, center: [f32; 2]) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center[0], center[1]])
            .build();
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0);
        self.insert(body, collider, PhysicsMaterial::STATIC)
    }

    /// Add a dynamic rectangle of `width` x `height` centred at `center`
    pub fn add_dynamic_rect(
        &mut self,
        width: f32,
        height: f32,
        center: [f32; 2],
        material: PhysicsMaterial,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center[0], center[1]])
            .build();
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0);
        self.insert(body, collider, material)
    }

    /// Add a dynamic circle of `radius` centred at `center`
    pub fn add_dynamic_circle(
        &mut self,
        radius: f32,
        center: [f32; 2],
        material: PhysicsMaterial,
    ) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![center[0], center[1]])
            .build();
        let collider = ColliderBuilder::ball(radius);
        self.insert(body, collider, material)
    }

    fn insert(
        &mut self,
        body: RigidBody,
        collider: ColliderBuilder,
        material: PhysicsMaterial,
    ) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        let collider = collider
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Connect two bodies with a revolute joint
    ///
    /// Returns `None` if either handle does not refer to a live body.
    pub fn add_revolute_joint(
        &mut self,
        body_a: RigidBodyHandle,
        body_b: RigidBodyHandle,
        def: &RevoluteJointDef,
    ) -> Option<ImpulseJointHandle> {
        let anchor = point![def.anchor[0], def.anchor[1]];
        let local_a = self.bodies.get(body_a)?.position().inverse_transform_point(&anchor);
        let local_b = self.bodies.get(body_b)?.position().inverse_transform_point(&anchor);

        let mut joint = RevoluteJointBuilder::new()
            .local_anchor1(local_a)
            .local_anchor2(local_b)
            .contacts_enabled(def.collide_connected);

        if def.enable_limit {
            joint = joint.limits([def.lower_angle, def.upper_angle]);
        }
        if def.enable_motor {
            joint = joint
                .motor_velocity(def.motor_speed, 1.0)
                .motor_max_force(def.max_motor_torque);
        }

        Some(self.impulse_joints.insert(body_a, body_b, joint, true))
    }

    /// Overwrite a body's linear velocity and wake it up
    pub fn set_linear_velocity(&mut self, handle: RigidBodyHandle, velocity: [f32; 2]) {
        match self.bodies.get_mut(handle) {
            Some(body) => {
                body.set_linvel(vector![velocity[0], velocity[1]], true);
                body.wake_up(true);
            }
            None => log::warn!("set_linear_velocity on unknown body {:?}", handle),
        }
    }

    /// Wake a body so it responds to forces and collisions
    pub fn wake_body(&mut self, handle: RigidBodyHandle) {
        if let Some(body) = self.bodies.get_mut(handle) {
            body.wake_up(true);
        }
    }

    /// Step the simulation forward by one fixed timestep
    ///
    /// Force and torque accumulators are cleared after the step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );

        for (_handle, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
            body.reset_torques(false);
        }
    }

    /// Feed the world through rapier's debug render pipeline
    pub fn debug_render(
        &self,
        pipeline: &mut DebugRenderPipeline,
        backend: &mut impl DebugRenderBackend,
    ) {
        pipeline.render(
            backend,
            &self.bodies,
            &self.colliders,
            &self.impulse_joints,
            &self.multibody_joints,
            &self.narrow_phase,
        );
    }

    /// World-space centre of a body
    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<[f32; 2]> {
        self.bodies.get(handle).map(|b| {
            let t = b.translation();
            [t.x, t.y]
        })
    }

    /// Linear velocity of a body
    pub fn body_linear_velocity(&self, handle: RigidBodyHandle) -> Option<[f32; 2]> {
        self.bodies.get(handle).map(|b| {
            let v = b.linvel();
            [v.x, v.y]
        })
    }

    /// Rotation angle of a body in radians
    pub fn body_angle(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(handle).map(|b| b.rotation().angle())
    }

    /// Whether the handle refers to a dynamic body
    pub fn is_dynamic(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.get(handle).is_some_and(|b| b.is_dynamic())
    }

    /// Whether the body is currently asleep
    pub fn is_sleeping(&self, handle: RigidBodyHandle) -> bool {
        self.bodies.get(handle).is_some_and(|b| b.is_sleeping())
    }

    /// Get the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get the number of colliders in the world
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Get the number of joints in the world
    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    /// Iterate over all body handles
    pub fn body_handles(&self) -> impl Iterator<Item = RigidBodyHandle> + '_ {
        self.bodies.iter().map(|(handle, _)| handle)
    }

    /// Gravity currently applied to the world
    pub fn gravity(&self) -> [f32; 2] {
        [self.gravity.x, self.gravity.y]
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, [0.0, 9.8]);
        assert_eq!(config.solver_iterations, 8);
        assert!((config.timestep - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_builders() {
        let config = PhysicsConfig::new([0.0, -10.0])
            .with_rate(120)
            .with_solver_iterations(0);
        assert_eq!(config.gravity, [0.0, -10.0]);
        assert!((config.timestep - 1.0 / 120.0).abs() < 1e-6);
        assert_eq!(config.solver_iterations, 1);
    }

    #[test]
    fn test_add_bodies() {
        let mut world = PhysicsWorld::new();
        let ground = world.add_static_rect(100.0, 10.0, [50.0, 100.0]);
        let ball = world.add_dynamic_circle(5.0, [50.0, 50.0], PhysicsMaterial::DEFAULT);

        assert_eq!(world.body_count(), 2);
        assert_eq!(world.collider_count(), 2);
        assert!(!world.is_dynamic(ground));
        assert!(world.is_dynamic(ball));
        assert_eq!(world.body_position(ground), Some([50.0, 100.0]));
    }

    #[test]
    fn test_dynamic_body_falls_down_screen() {
        let mut world = PhysicsWorld::new();
        let body = world.add_dynamic_rect(2.0, 2.0, [0.0, 0.0], PhysicsMaterial::DEFAULT);

        for _ in 0..30 {
            world.step();
        }

        let pos = world.body_position(body).unwrap();
        assert!(pos[1] > 0.0, "body should move toward +y, got {:?}", pos);
        assert!(pos[0].abs() < 1e-4);
    }

    #[test]
    fn test_static_body_does_not_move() {
        let mut world = PhysicsWorld::new();
        let wall = world.add_static_rect(10.0, 100.0, [0.0, 50.0]);

        for _ in 0..10 {
            world.step();
        }

        assert_eq!(world.body_position(wall), Some([0.0, 50.0]));
    }

    #[test]
    fn test_set_linear_velocity() {
        let mut world = PhysicsWorld::with_config(PhysicsConfig::new([0.0, 0.0]));
        let body = world.add_dynamic_rect(1.0, 1.0, [0.0, 0.0], PhysicsMaterial::DEFAULT);

        world.set_linear_velocity(body, [60.0, 0.0]);
        world.step();

        let pos = world.body_position(body).unwrap();
        assert!((pos[0] - 1.0).abs() < 0.05, "expected ~1 unit of travel, got {}", pos[0]);
    }

    #[test]
    fn test_joint_requires_live_bodies() {
        let mut world = PhysicsWorld::new();
        let a = world.add_dynamic_rect(1.0, 1.0, [0.0, 0.0], PhysicsMaterial::DEFAULT);
        let dangling = RigidBodyHandle::invalid();

        let def = RevoluteJointDef::limb([0.0, 0.5]);
        assert!(world.add_revolute_joint(a, dangling, &def).is_none());
        assert_eq!(world.joint_count(), 0);
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut world = PhysicsWorld::new();
        let dangling = RigidBodyHandle::invalid();

        world.set_linear_velocity(dangling, [1.0, 1.0]);
        world.wake_body(dangling);
        assert!(world.body_position(dangling).is_none());
        assert!(!world.is_dynamic(dangling));
    }
}
