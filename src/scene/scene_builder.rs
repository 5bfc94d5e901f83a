//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building the ragdoll scene.

use ragdoll_physics::{
    BodyHandle, JointHandle, PhysicsConfig, PhysicsMaterial, PhysicsWorld, RevoluteJointDef,
};

/// The four static walls enclosing the 100 x 100 play area
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub ground: BodyHandle,
    pub left_wall: BodyHandle,
    pub right_wall: BodyHandle,
    pub top_wall: BodyHandle,
}

impl Arena {
    pub fn bodies(&self) -> [BodyHandle; 4] {
        [self.ground, self.left_wall, self.right_wall, self.top_wall]
    }
}

/// Bodies and joints of one ragdoll
#[derive(Debug, Clone)]
pub struct Ragdoll {
    /// Keyboard-controlled body
    pub torso: BodyHandle,
    pub head: BodyHandle,
    pub upper_left_arm: BodyHandle,
    pub upper_right_arm: BodyHandle,
    pub upper_left_leg: BodyHandle,
    pub upper_right_leg: BodyHandle,
    /// Neck, shoulders and hips (torso to limb)
    pub joints: Vec<JointHandle>,
}

impl Ragdoll {
    pub fn bodies(&self) -> [BodyHandle; 6] {
        [
            self.torso,
            self.head,
            self.upper_left_arm,
            self.upper_right_arm,
            self.upper_left_leg,
            self.upper_right_leg,
        ]
    }

    /// Build a ragdoll whose torso is centred on `center`
    ///
    /// Head below the torso, arms to the sides, legs above it; each limb is
    /// pinned to the torso with a limited revolute joint.
    fn spawn(physics: &mut PhysicsWorld, center: [f32; 2]) -> Self {
        let [cx, cy] = center;
        let material = PhysicsMaterial::DEFAULT;
        let at = |dx: f32, dy: f32| [cx + dx, cy + dy];

        let torso = physics.add_dynamic_rect(10.0, 15.0, center, material);
        let head = physics.add_dynamic_circle(5.0, at(0.0, 12.5), material);
        let upper_left_arm = physics.add_dynamic_rect(12.0, 4.0, at(-11.0, 0.0), material);
        let upper_right_arm = physics.add_dynamic_rect(12.0, 4.0, at(11.0, 0.0), material);
        let upper_left_leg = physics.add_dynamic_rect(6.0, 12.0, at(-3.0, -15.0), material);
        let upper_right_leg = physics.add_dynamic_rect(6.0, 12.0, at(3.0, -15.0), material);

        let limbs = [
            (head, at(0.0, 7.5), "neck"),
            (upper_left_arm, at(-5.0, 7.5), "left shoulder"),
            (upper_right_arm, at(5.0, 7.5), "right shoulder"),
            (upper_left_leg, at(-2.0, -7.5), "left hip"),
            (upper_right_leg, at(2.0, -7.5), "right hip"),
        ];

        let mut joints = Vec::with_capacity(limbs.len());
        for (limb, anchor, name) in limbs {
            match physics.add_revolute_joint(torso, limb, &RevoluteJointDef::limb(anchor)) {
                Some(joint) => joints.push(joint),
                None => log::warn!("Failed to create {} joint", name),
            }
        }

        Self {
            torso,
            head,
            upper_left_arm,
            upper_right_arm,
            upper_left_leg,
            upper_right_leg,
            joints,
        }
    }
}

/// A built scene: the physics world plus handles into it
pub struct Scene {
    pub physics: PhysicsWorld,
    pub arena: Option<Arena>,
    pub ragdoll: Option<Ragdoll>,
}

impl Scene {
    /// The walled arena with one ragdoll in the middle
    pub fn demo(config: &PhysicsConfig) -> Self {
        SceneBuilder::new()
            .with_physics(config.clone())
            .add_arena()
            .add_ragdoll([50.0, 50.0])
            .build()
    }

    /// Body driven by the keyboard (the ragdoll torso)
    pub fn controlled_body(&self) -> Option<BodyHandle> {
        self.ragdoll.as_ref().map(|r| r.torso)
    }
}

/// Builder for constructing the scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .with_physics(PhysicsConfig::default())
///     .add_arena()
///     .add_ragdoll([50.0, 50.0])
///     .build();
/// ```
pub struct SceneBuilder {
    physics: PhysicsWorld,
    arena: Option<Arena>,
    ragdoll: Option<Ragdoll>,
}

impl SceneBuilder {
    /// Create a new scene builder with default physics
    pub fn new() -> Self {
        Self {
            physics: PhysicsWorld::new(),
            arena: None,
            ragdoll: None,
        }
    }

    /// Replace the physics world with one using `config`
    ///
    /// Call this before adding anything; bodies added earlier are dropped.
    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics = PhysicsWorld::with_config(config);
        self.arena = None;
        self.ragdoll = None;
        self
    }

    /// Add the ground, side walls and ceiling (each 10 units thick)
    pub fn add_arena(mut self) -> Self {
        let ground = self.physics.add_static_rect(100.0, 10.0, [50.0, 100.0]);
        let left_wall = self.physics.add_static_rect(10.0, 100.0, [0.0, 50.0]);
        let right_wall = self.physics.add_static_rect(10.0, 100.0, [100.0, 50.0]);
        let top_wall = self.physics.add_static_rect(100.0, 10.0, [50.0, 0.0]);

        self.arena = Some(Arena {
            ground,
            left_wall,
            right_wall,
            top_wall,
        });
        self
    }

    /// Add a ragdoll with its torso centred on `center`
    ///
    /// A scene holds one ragdoll; adding another replaces which one is
    /// controlled, the previous bodies stay in the world.
    pub fn add_ragdoll(mut self, center: [f32; 2]) -> Self {
        self.ragdoll = Some(Ragdoll::spawn(&mut self.physics, center));
        self
    }

    /// Build the scene
    pub fn build(self) -> Scene {
        log::info!(
            "Built scene with {} bodies and {} joints",
            self.physics.body_count(),
            self.physics.joint_count()
        );
        Scene {
            physics: self.physics,
            arena: self.arena,
            ragdoll: self.ragdoll,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
