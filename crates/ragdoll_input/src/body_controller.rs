//! Arrow-key controller for a single physics body
//!
//! Controls:
//! - Left/Right: move along X
//! - Up/Down: move along Y (screen space, Down is +Y)
//!
//! The controller only reports a velocity; the simulation overwrites the
//! body's linear velocity with it every frame, so releasing every key stops
//! the body dead.

use bitflags::bitflags;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Speed applied along an axis while its key is held (units per second)
pub const DEFAULT_CONTROL_SPEED: f32 = 50.0;

bitflags! {
    /// Set of held direction keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Direction: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

impl Direction {
    /// Direction bound to a key, if any
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::ArrowLeft => Some(Self::LEFT),
            KeyCode::ArrowRight => Some(Self::RIGHT),
            KeyCode::ArrowUp => Some(Self::UP),
            KeyCode::ArrowDown => Some(Self::DOWN),
            _ => None,
        }
    }
}

/// Tracks held arrow keys and maps them to a body velocity
#[derive(Debug, Clone)]
pub struct BodyController {
    held: Direction,
    /// Velocity magnitude per axis
    pub speed: f32,
}

impl Default for BodyController {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyController {
    pub fn new() -> Self {
        Self {
            held: Direction::empty(),
            speed: DEFAULT_CONTROL_SPEED,
        }
    }

    /// Builder: set control speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one of the direction keys.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let Some(direction) = Direction::from_key(key) else {
            return false;
        };
        self.held.set(direction, state == ElementState::Pressed);
        true
    }

    /// Forget every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = Direction::empty();
    }

    /// Currently held directions
    pub fn held(&self) -> Direction {
        self.held
    }

    /// Check if any direction key is held
    pub fn is_moving(&self) -> bool {
        !self.held.is_empty()
    }

    /// Velocity for the controlled body
    ///
    /// Each axis is either zero or +/- `speed`. When opposite keys are both
    /// held, Right wins on X and Up wins on Y.
    pub fn velocity(&self) -> [f32; 2] {
        let mut velocity = [0.0, 0.0];
        if self.held.contains(Direction::LEFT) {
            velocity[0] = -self.speed;
        }
        if self.held.contains(Direction::RIGHT) {
            velocity[0] = self.speed;
        }
        if self.held.contains(Direction::DOWN) {
            velocity[1] = self.speed;
        }
        if self.held.contains(Direction::UP) {
            velocity[1] = -self.speed;
        }
        velocity
    }
}
