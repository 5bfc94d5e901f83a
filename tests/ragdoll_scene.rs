//! Integration tests for the demo scene running under the simulation loop

use ragdoll2d::scene::Scene;
use ragdoll2d::systems::SimulationSystem;
use ragdoll_input::BodyController;
use ragdoll_physics::PhysicsConfig;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

fn run(scene: &mut Scene, controller: &BodyController, frames: usize) {
    let mut sim = SimulationSystem::new();
    for _ in 0..frames {
        sim.update(scene, controller);
    }
}

#[test]
fn test_ragdoll_falls_and_settles_inside_arena() {
    let mut scene = Scene::demo(&PhysicsConfig::default());
    let head = scene.ragdoll.as_ref().unwrap().head;
    let start = scene.physics.body_position(head).unwrap();

    run(&mut scene, &BodyController::new(), 600);

    let ragdoll = scene.ragdoll.as_ref().unwrap();
    let end = scene.physics.body_position(head).unwrap();
    assert!(end[1] > start[1], "head should fall: {:?} -> {:?}", start, end);

    // Walls are 10 units thick, so the interior spans 5..95 on both axes
    for body in ragdoll.bodies() {
        let pos = scene.physics.body_position(body).unwrap();
        assert!(pos[0] > 5.0 && pos[0] < 95.0, "body escaped sideways: {:?}", pos);
        assert!(pos[1] > 5.0 && pos[1] < 95.0, "body escaped vertically: {:?}", pos);
    }
}

#[test]
fn test_walls_stop_controlled_torso() {
    let mut scene = Scene::demo(&PhysicsConfig::default());
    let torso = scene.controlled_body().unwrap();
    let mut controller = BodyController::new();
    controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);

    run(&mut scene, &controller, 240);

    let pos = scene.physics.body_position(torso).unwrap();
    assert!(pos[0] < 30.0, "torso should have moved left: {:?}", pos);
    assert!(pos[0] > 5.0, "torso passed through the left wall: {:?}", pos);
}

#[test]
fn test_walls_never_move() {
    let mut scene = Scene::demo(&PhysicsConfig::default());
    let arena = scene.arena.unwrap();
    let before: Vec<_> = arena
        .bodies()
        .iter()
        .map(|&b| scene.physics.body_position(b))
        .collect();

    let mut controller = BodyController::new();
    controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
    run(&mut scene, &controller, 120);

    for (body, expected) in arena.bodies().iter().zip(before) {
        assert!(!scene.physics.is_dynamic(*body));
        assert_eq!(scene.physics.body_position(*body), expected);
    }
}
