//! Mover backend abstraction.
//!
//! This module defines the trait that collision-resolving movers must
//! implement to work with the locomotion controller. The controller only
//! computes a displacement; sweeping it against the world and detecting
//! ground contact is the backend's job (Rapier3D, a custom kinematic
//! solver, or a test double).

use bevy::prelude::*;

/// Trait for mover backend implementations.
///
/// Implement this trait to integrate a kinematic mover with the controller.
/// The backend receives one displacement per tick and reports whether the
/// actor rests on walkable ground.
///
/// # Example
///
/// For an example implementation, see the `rapier` module's
/// `Rapier3dBackend`, which drives Bevy Rapier3D's kinematic character
/// controller.
pub trait LocomotionBackend: 'static + Send + Sync {
    /// Returns the plugin that sets up this backend.
    fn plugin() -> impl Plugin;

    /// Hand this tick's displacement to the mover.
    ///
    /// The mover resolves it against world geometry. Backends that resolve
    /// later in the frame must keep the most recent request.
    fn submit_displacement(world: &mut World, entity: Entity, displacement: Vec3);

    /// Whether the entity rests on the ground according to the mover's most
    /// recent resolved move. Returns `false` when unknown.
    fn is_grounded(world: &World, entity: Entity) -> bool;

    /// Frame delta used to advance controllers.
    fn delta_seconds(world: &World) -> f32 {
        world
            .get_resource::<Time>()
            .map(|t| t.delta_secs())
            .unwrap_or(0.0)
    }
}

/// Empty plugin for backends that don't need additional setup.
pub struct NoOpBackendPlugin;

impl Plugin for NoOpBackendPlugin {
    fn build(&self, _app: &mut App) {}
}
