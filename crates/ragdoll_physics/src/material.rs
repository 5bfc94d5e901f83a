//! Fixture material properties for colliders

/// Physical material properties attached to a collider
///
/// Mirrors the classic fixture parameters: density drives the body's mass,
/// friction resists sliding and restitution controls bounciness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    /// Mass per unit area
    pub density: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PhysicsMaterial {
    /// Limb material used by the ragdoll
    pub const DEFAULT: Self = Self {
        density: 1.0,
        friction: 0.5,
        restitution: 0.1,
    };

    /// Static geometry: no mass contribution, moderate friction
    pub const STATIC: Self = Self {
        density: 0.0,
        friction: 0.5,
        restitution: 0.0,
    };

    /// Rubber-like material: high friction, very bouncy
    pub const RUBBER: Self = Self {
        density: 1.2,
        friction: 0.9,
        restitution: 0.8,
    };

    /// Ice-like material: very low friction, slight bounce
    pub const ICE: Self = Self {
        density: 0.9,
        friction: 0.05,
        restitution: 0.1,
    };

    /// Create a new material
    ///
    /// Friction and restitution are clamped to [0.0, 1.0]; density is
    /// clamped to be non-negative.
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density: density.max(0.0),
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let material = PhysicsMaterial::default();
        assert_eq!(material.density, 1.0);
        assert_eq!(material.friction, 0.5);
        assert_eq!(material.restitution, 0.1);
    }

    #[test]
    fn test_new_clamps_values() {
        let material = PhysicsMaterial::new(-2.0, 1.5, -0.5);
        assert_eq!(material.density, 0.0);
        assert_eq!(material.friction, 1.0);
        assert_eq!(material.restitution, 0.0);

        let material = PhysicsMaterial::new(3.0, -1.0, 2.0);
        assert_eq!(material.density, 3.0);
        assert_eq!(material.friction, 0.0);
        assert_eq!(material.restitution, 1.0);
    }

    #[test]
    fn test_preset_constants() {
        assert!(PhysicsMaterial::ICE.friction < 0.1);
        assert!(PhysicsMaterial::RUBBER.restitution > 0.7);
        assert_eq!(PhysicsMaterial::STATIC.density, 0.0);
    }
}
