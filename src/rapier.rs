//! Rapier3D mover backend implementation.
//!
//! This module drives Bevy Rapier3D's kinematic character controller.
//! Enable with the `rapier3d` feature.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::backend::LocomotionBackend;
use crate::controller::LocomotionController;

/// Rapier3D mover backend for the locomotion controller.
///
/// Displacements are written to [`KinematicCharacterController::translation`]
/// and resolved by Rapier during its physics step later in the frame. The
/// grounded flag comes from [`KinematicCharacterControllerOutput`], so it
/// always describes the previous tick's move when the controller reads it.
pub struct Rapier3dBackend;

impl LocomotionBackend for Rapier3dBackend {
    fn plugin() -> impl Plugin {
        Rapier3dBackendPlugin
    }

    fn submit_displacement(world: &mut World, entity: Entity, displacement: Vec3) {
        if let Some(mut character) = world.get_mut::<KinematicCharacterController>(entity) {
            character.translation = Some(displacement);
        }
    }

    fn is_grounded(world: &World, entity: Entity) -> bool {
        world
            .get::<KinematicCharacterControllerOutput>(entity)
            .map(|output| output.grounded)
            .unwrap_or(false)
    }
}

/// Plugin that sets up Rapier3D-specific systems for the controller.
pub struct Rapier3dBackendPlugin;

impl Plugin for Rapier3dBackendPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            warn_missing_character_controller.before(crate::LocomotionSet::Advance),
        );
    }
}

/// Warn once for controllers spawned without a Rapier character controller.
/// Their displacements are dropped.
fn warn_missing_character_controller(
    q_new: Query<
        Entity,
        (
            Added<LocomotionController>,
            Without<KinematicCharacterController>,
        ),
    >,
) {
    for entity in &q_new {
        warn!(
            "locomotion controller {entity} has no KinematicCharacterController, it will not move"
        );
    }
}

/// Bundle for creating a first-person body with Rapier3D.
///
/// Provides a kinematic position-based rigid body and a character
/// controller tuned for walking. The collider is left to the caller.
///
/// # Example
///
/// ```ignore
/// use bevy::prelude::*;
/// use bevy_rapier3d::prelude::*;
/// use fps_locomotion::prelude::*;
///
/// fn spawn_player(mut commands: Commands) {
///     commands
///         .spawn((
///             Transform::from_xyz(0.0, 1.0, 0.0),
///             LocomotionController::new(),
///             LocomotionConfig::player(),
///             PlayerInput,
///             Rapier3dLocomotionBundle::new(),
///             Collider::capsule_y(0.5, 0.3),
///         ))
///         .with_child((Transform::from_xyz(0.0, 0.6, 0.0), ViewpointNode));
/// }
/// ```
#[derive(Bundle)]
pub struct Rapier3dLocomotionBundle {
    /// Should stay [`RigidBody::KinematicPositionBased`] for the character
    /// controller to move it.
    pub rigid_body: RigidBody,
    /// Rapier's kinematic character controller, fed by the backend.
    pub character_controller: KinematicCharacterController,
}

impl Default for Rapier3dLocomotionBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl Rapier3dLocomotionBundle {
    /// Create a bundle with ground snapping and a small skin offset.
    ///
    /// # Defaults
    ///
    /// - Rigid body: [`RigidBody::KinematicPositionBased`]
    /// - Offset: 0.01
    /// - Snap to ground: 0.2
    /// - Slopes: climb up to 45 degrees, slide from 30 degrees
    pub fn new() -> Self {
        Self {
            rigid_body: RigidBody::KinematicPositionBased,
            character_controller: KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                snap_to_ground: Some(CharacterLength::Absolute(0.2)),
                max_slope_climb_angle: 45.0_f32.to_radians(),
                min_slope_slide_angle: 30.0_f32.to_radians(),
                ..default()
            },
        }
    }

    /// Set or disable ground snapping distance.
    pub fn with_snap_to_ground(mut self, distance: Option<f32>) -> Self {
        self.character_controller.snap_to_ground = distance.map(CharacterLength::Absolute);
        self
    }

    /// Set the steepest climbable slope, in degrees.
    pub fn with_max_slope_climb_angle(mut self, degrees: f32) -> Self {
        self.character_controller.max_slope_climb_angle = degrees.to_radians();
        self
    }

    /// Enable automatic stepping over small obstacles.
    pub fn with_autostep(mut self, max_height: f32, min_width: f32) -> Self {
        self.character_controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(max_height),
            min_width: CharacterLength::Absolute(min_width),
            include_dynamic_bodies: false,
        });
        self
    }
}
