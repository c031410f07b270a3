//! # `fps_locomotion`
//!
//! A first-person locomotion controller with a pluggable mover backend.
//!
//! This crate provides a controller that, once per frame:
//! - Turns the body with horizontal look input and pitches a viewpoint node
//!   with vertical look input, clamped to a configurable range
//! - Walks or runs on the horizontal plane at a constant speed, with
//!   diagonal input normalized
//! - Integrates gravity and closed-form jumps into a vertical velocity
//! - Hands the resulting displacement to a collision-resolving mover and
//!   reads back whether the actor is grounded
//! - Publishes speed, running and grounded state to an animation sink
//!
//! ## Architecture
//!
//! The controller never resolves collisions itself:
//! 1. Input is written to [`LocomotionIntent`](intent::LocomotionIntent)
//! 2. [`LocomotionController::advance`](controller::LocomotionController::advance)
//!    turns it into rotations and a displacement
//! 3. A [`LocomotionBackend`](backend::LocomotionBackend) sweeps the
//!    displacement and reports ground contact for the next tick
//!
//! ## Usage
//!
//! ```rust
//! use bevy::prelude::*;
//! use fps_locomotion::prelude::*;
//!
//! // Components for a player-controlled body
//! let controller = LocomotionController::new();
//! let config = LocomotionConfig::player();
//! let intent = LocomotionIntent::default();
//! ```

use bevy::prelude::*;

pub mod animation;
pub mod backend;
pub mod camera;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod input;
pub mod intent;
pub mod state;
pub mod systems;

#[cfg(feature = "rapier3d")]
pub mod rapier;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::animation::{AnimationParameters, AnimationSink, AnimatorLink};
    pub use crate::backend::LocomotionBackend;
    pub use crate::camera::{ViewpointLink, ViewpointNode};
    pub use crate::config::LocomotionConfig;
    pub use crate::controller::{LocomotionController, LocomotionInput, LocomotionStep};
    pub use crate::cursor::CursorLockRequest;
    pub use crate::input::{InputBindings, PlayerInput};
    pub use crate::intent::LocomotionIntent;
    pub use crate::state::{Airborne, Grounded};
    pub use crate::{LocomotionPlugin, LocomotionSet};

    #[cfg(feature = "rapier3d")]
    pub use crate::rapier::{Rapier3dBackend, Rapier3dLocomotionBundle};
}

/// System sets for the locomotion controller, run in order in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Resolve new controllers, gather device input, apply cursor requests.
    Input,
    /// Advance controllers and submit displacements to the mover.
    Advance,
    /// Publish animation parameters and state markers.
    Publish,
}

/// Main plugin for the locomotion controller.
///
/// This plugin is generic over a mover backend `B` which resolves the
/// submitted displacement against the world.
///
/// # Type Parameters
/// - `B`: The mover backend implementation (e.g., `Rapier3dBackend`)
///
/// # Examples
///
/// With Rapier3D backend:
/// ```rust,ignore
/// use bevy::prelude::*;
/// use bevy_rapier3d::prelude::*;
/// use fps_locomotion::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
///     .add_plugins(LocomotionPlugin::<Rapier3dBackend>::default())
///     .run();
/// ```
pub struct LocomotionPlugin<B: backend::LocomotionBackend> {
    _marker: std::marker::PhantomData<B>,
}

impl<B: backend::LocomotionBackend> Default for LocomotionPlugin<B> {
    fn default() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<B: backend::LocomotionBackend> Plugin for LocomotionPlugin<B> {
    fn build(&self, app: &mut App) {
        app.register_type::<config::LocomotionConfig>();
        app.register_type::<controller::LocomotionController>();
        app.register_type::<intent::LocomotionIntent>();
        app.register_type::<camera::ViewpointNode>();
        app.register_type::<camera::ViewpointLink>();
        app.register_type::<animation::AnimationParameters>();
        app.register_type::<animation::AnimatorLink>();
        app.register_type::<input::PlayerInput>();
        app.register_type::<state::Grounded>();
        app.register_type::<state::Airborne>();

        app.init_resource::<input::InputBindings>();
        app.add_event::<cursor::CursorLockRequest>();

        app.add_plugins(B::plugin());

        app.add_observer(systems::on_controller_added);
        app.add_observer(systems::on_controller_removed);

        app.configure_sets(
            Update,
            (
                LocomotionSet::Input,
                LocomotionSet::Advance,
                LocomotionSet::Publish,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                (systems::initialize_controllers, input::gather_player_input).chain(),
                cursor::apply_cursor_requests,
            )
                .in_set(LocomotionSet::Input),
        );
        app.add_systems(
            Update,
            systems::advance_controllers::<B>.in_set(LocomotionSet::Advance),
        );
        app.add_systems(
            Update,
            (
                systems::publish_animation_parameters,
                systems::sync_state_markers,
            )
                .in_set(LocomotionSet::Publish),
        );
    }
}
