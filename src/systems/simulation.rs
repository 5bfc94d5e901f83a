//! Game simulation system
//!
//! Runs one simulation tick per frame:
//! - Input → controlled body velocity
//! - Physics stepping (fixed timestep)

use ragdoll_input::BodyController;

use crate::scene::Scene;

/// Manages the per-frame simulation tick
///
/// The physics always advances by its configured fixed timestep, once per
/// rendered frame. The frame limiter keeps that in step with wall time.
pub struct SimulationSystem {
    paused: bool,
    steps: u64,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            paused: false,
            steps: 0,
        }
    }

    /// Run one simulation frame
    ///
    /// The controlled body's velocity is overwritten with the controller's
    /// velocity (zero when no key is held) and the body is woken, then the
    /// world is stepped. Returns false when paused.
    pub fn update(&mut self, scene: &mut Scene, controller: &BodyController) -> bool {
        if self.paused {
            return false;
        }

        if let Some(body) = scene.controlled_body() {
            scene.physics.set_linear_velocity(body, controller.velocity());
        }

        scene.physics.step();
        self.steps += 1;
        true
    }

    /// Pause or resume, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Physics steps taken since creation or the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Forget step count (used when the scene is rebuilt)
    pub fn reset(&mut self) {
        self.steps = 0;
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragdoll_physics::PhysicsConfig;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn demo_scene() -> Scene {
        Scene::demo(&PhysicsConfig::default())
    }

    #[test]
    fn test_idle_torso_does_not_drift_sideways() {
        let mut scene = demo_scene();
        let mut sim = SimulationSystem::new();
        let controller = BodyController::new();
        let torso = scene.controlled_body().unwrap();

        for _ in 0..30 {
            sim.update(&mut scene, &controller);
        }

        // The ragdoll is symmetric and the torso velocity is zeroed every frame
        let pos = scene.physics.body_position(torso).unwrap();
        let vel = scene.physics.body_linear_velocity(torso).unwrap();
        assert!((pos[0] - 50.0).abs() < 1.0, "torso drifted to {:?}", pos);
        assert!(vel[0].abs() < 5.0, "torso velocity {:?}", vel);
        assert_eq!(sim.steps(), 30);
    }

    #[test]
    fn test_arrow_key_moves_torso() {
        let mut scene = demo_scene();
        let mut sim = SimulationSystem::new();
        let mut controller = BodyController::new();
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        let torso = scene.controlled_body().unwrap();
        let start = scene.physics.body_position(torso).unwrap();

        for _ in 0..20 {
            sim.update(&mut scene, &controller);
        }

        let end = scene.physics.body_position(torso).unwrap();
        assert!(end[0] > start[0] + 3.0, "torso should move right: {:?} -> {:?}", start, end);
    }

    #[test]
    fn test_pause_skips_stepping() {
        let mut scene = demo_scene();
        let mut sim = SimulationSystem::default();
        let controller = BodyController::new();
        let head = scene.ragdoll.as_ref().unwrap().head;
        let before = scene.physics.body_position(head);

        assert!(sim.toggle_pause());
        assert!(!sim.update(&mut scene, &controller));
        assert_eq!(scene.physics.body_position(head), before);
        assert_eq!(sim.steps(), 0);

        assert!(!sim.toggle_pause());
        assert!(sim.update(&mut scene, &controller));
    }
}
