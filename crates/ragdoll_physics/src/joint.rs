//! Revolute joint definitions

/// Description of a revolute (pin) joint between two bodies
///
/// The anchor is given in world coordinates and is converted to each body's
/// local frame when the joint is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevoluteJointDef {
    /// Pivot point in world coordinates
    pub anchor: [f32; 2],
    /// Lower angle limit in radians
    pub lower_angle: f32,
    /// Upper angle limit in radians
    pub upper_angle: f32,
    /// Target motor angular velocity (rad/s)
    pub motor_speed: f32,
    /// Maximum torque the motor may apply
    pub max_motor_torque: f32,
    pub enable_motor: bool,
    pub enable_limit: bool,
    /// Whether the two connected bodies collide with each other
    pub collide_connected: bool,
}

impl RevoluteJointDef {
    /// Unconstrained pin joint at `anchor`
    pub fn new(anchor: [f32; 2]) -> Self {
        Self {
            anchor,
            lower_angle: 0.0,
            upper_angle: 0.0,
            motor_speed: 0.0,
            max_motor_torque: 0.0,
            enable_motor: false,
            enable_limit: false,
            collide_connected: false,
        }
    }

    /// Ragdoll limb joint: +/-0.5 rad limit, idle motor with 10 max torque
    pub fn limb(anchor: [f32; 2]) -> Self {
        Self::new(anchor)
            .with_limits(-0.5, 0.5)
            .with_motor(0.0, 10.0, false)
    }

    /// Set and enable the angle limits
    pub fn with_limits(mut self, lower: f32, upper: f32) -> Self {
        self.lower_angle = lower.min(upper);
        self.upper_angle = lower.max(upper);
        self.enable_limit = true;
        self
    }

    /// Disable the angle limits (keeps the stored values)
    pub fn without_limit(mut self) -> Self {
        self.enable_limit = false;
        self
    }

    /// Configure the motor
    pub fn with_motor(mut self, speed: f32, max_torque: f32, enabled: bool) -> Self {
        self.motor_speed = speed;
        self.max_motor_torque = max_torque.max(0.0);
        self.enable_motor = enabled;
        self
    }

    /// Let the connected bodies collide with each other
    pub fn with_collide_connected(mut self, collide: bool) -> Self {
        self.collide_connected = collide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limb_defaults() {
        let def = RevoluteJointDef::limb([1.0, 2.0]);
        assert_eq!(def.anchor, [1.0, 2.0]);
        assert_eq!(def.lower_angle, -0.5);
        assert_eq!(def.upper_angle, 0.5);
        assert!(def.enable_limit);
        assert!(!def.enable_motor);
        assert_eq!(def.max_motor_torque, 10.0);
        assert!(!def.collide_connected);
    }

    #[test]
    fn test_limits_are_ordered() {
        let def = RevoluteJointDef::new([0.0, 0.0]).with_limits(1.0, -1.0);
        assert_eq!(def.lower_angle, -1.0);
        assert_eq!(def.upper_angle, 1.0);
    }

    #[test]
    fn test_without_limit() {
        let def = RevoluteJointDef::limb([0.0, 0.0]).without_limit();
        assert!(!def.enable_limit);
        assert_eq!(def.upper_angle, 0.5);
    }
}
