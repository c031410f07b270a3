//! End-to-end tests with the Rapier3D kinematic character controller.

#![cfg(feature = "rapier3d")]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;
use fps_locomotion::prelude::*;

/// Create a minimal test app with physics and the locomotion plugin.
fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.add_plugins(TransformPlugin);
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default());
    app.add_plugins(LocomotionPlugin::<Rapier3dBackend>::default());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        1.0 / 60.0,
    )));

    app.finish();
    app.cleanup();
    app
}

/// Spawn a static floor whose top surface is at y = 0.
fn spawn_floor(app: &mut App) -> Entity {
    let transform = Transform::from_xyz(0.0, -0.5, 0.0);
    app.world_mut()
        .spawn((
            transform,
            GlobalTransform::from(transform),
            RigidBody::Fixed,
            Collider::cuboid(50.0, 0.5, 50.0),
        ))
        .id()
}

/// Spawn a capsule body (bottom at y = 0.2) with the locomotion controller.
fn spawn_player(app: &mut App) -> Entity {
    let transform = Transform::from_xyz(0.0, 1.0, 0.0);
    app.world_mut()
        .spawn((
            transform,
            GlobalTransform::from(transform),
            LocomotionController::new(),
            LocomotionConfig::player(),
            Rapier3dLocomotionBundle::new(),
            Collider::capsule_y(0.5, 0.3),
        ))
        .id()
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn player_settles_on_floor() {
    let mut app = create_test_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app);

    run_frames(&mut app, 120);

    let y = app.world().get::<Transform>(player).unwrap().translation.y;
    let controller = app.world().get::<LocomotionController>(player).unwrap();
    println!("PROOF: y={y}, grounded={}", controller.grounded);

    assert!(controller.grounded, "player should rest on the floor");
    // Capsule center sits half_height + radius above the floor
    assert!(y > 0.7 && y < 0.9, "player center at {y}");
}

#[test]
fn player_walks_over_floor() {
    let mut app = create_test_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app);
    run_frames(&mut app, 60);

    app.world_mut()
        .get_mut::<LocomotionIntent>(player)
        .unwrap()
        .set_movement(Vec2::Y);
    let start = app.world().get::<Transform>(player).unwrap().translation;
    run_frames(&mut app, 60);
    let end = app.world().get::<Transform>(player).unwrap().translation;

    println!("PROOF: start={start:?}, end={end:?}");
    // Walking forward (-Z) at 3.5 m/s for about a second
    assert!(end.z < start.z - 2.5, "player should walk forward");
    assert!((end.y - start.y).abs() < 0.1, "player should stay on the floor");
}

#[test]
fn player_without_character_controller_stays_put() {
    let mut app = create_test_app();
    let transform = Transform::from_xyz(0.0, 3.0, 0.0);
    let player = app
        .world_mut()
        .spawn((
            transform,
            GlobalTransform::from(transform),
            LocomotionController::new(),
        ))
        .id();

    run_frames(&mut app, 10);

    let y = app.world().get::<Transform>(player).unwrap().translation.y;
    assert_eq!(y, 3.0);
    assert!(!app.world().get::<LocomotionController>(player).unwrap().grounded);
}
