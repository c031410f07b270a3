//! Core controller systems.
//!
//! These systems wire [`LocomotionController::advance`] into the ECS: they
//! resolve optional collaborators once, round-trip the displacement through
//! the mover backend, and publish the result to markers and animation.

use bevy::prelude::*;

use crate::animation::{publish_locomotion, AnimationParameters, AnimatorLink};
use crate::backend::LocomotionBackend;
use crate::camera::{resolve_viewpoint, ViewpointLink, ViewpointNode};
use crate::config::LocomotionConfig;
use crate::controller::{LocomotionController, LocomotionInput};
use crate::cursor::CursorLockRequest;
use crate::input::InputBindings;
use crate::intent::LocomotionIntent;
use crate::state::{Airborne, Grounded};

/// Activation hook: enable input bindings, request cursor lock and report
/// config problems.
pub fn on_controller_added(
    trigger: Trigger<OnAdd, LocomotionController>,
    q_configs: Query<&LocomotionConfig>,
    mut bindings: ResMut<InputBindings>,
    mut cursor: EventWriter<CursorLockRequest>,
) {
    let entity = trigger.target();

    bindings.acquire();
    cursor.write(CursorLockRequest::Lock);

    if let Ok(config) = q_configs.get(entity) {
        for problem in config.problems() {
            warn!("locomotion controller {entity}: {problem}");
        }
    }
}

/// Deactivation hook: release bindings and the cursor once no controller
/// is left.
pub fn on_controller_removed(
    trigger: Trigger<OnRemove, LocomotionController>,
    mut bindings: ResMut<InputBindings>,
    mut cursor: EventWriter<CursorLockRequest>,
) {
    if bindings.release() {
        debug!(
            "last locomotion controller {} removed, releasing input",
            trigger.target()
        );
        cursor.write(CursorLockRequest::Release);
    }
}

/// Resolve viewpoint and animator references for newly added controllers.
///
/// Runs once per controller, after its hierarchy has been spawned. The
/// result is stored on the controller and never re-queried.
pub fn initialize_controllers(
    mut q_new: Query<
        (
            Entity,
            &mut LocomotionController,
            Option<&ViewpointLink>,
            Option<&AnimatorLink>,
        ),
        Added<LocomotionController>,
    >,
    q_children: Query<&Children>,
    q_viewpoints: Query<Entity, With<ViewpointNode>>,
    q_animators: Query<(), With<AnimationParameters>>,
) {
    for (entity, mut controller, viewpoint_link, animator_link) in &mut q_new {
        let link = controller.viewpoint.or(viewpoint_link.map(|l| l.0));
        let viewpoint = resolve_viewpoint(
            link,
            q_children.iter_descendants(entity),
            |e| q_viewpoints.contains(e),
            q_viewpoints.iter().next(),
        );

        let animator = controller
            .animator
            .or(animator_link.map(|l| l.0))
            .or_else(|| q_animators.contains(entity).then_some(entity))
            .or_else(|| {
                q_children
                    .iter_descendants(entity)
                    .find(|&e| q_animators.contains(e))
            });

        if viewpoint.is_none() {
            debug!("locomotion controller {entity} has no viewpoint, pitch will not be applied");
        }

        controller.viewpoint = viewpoint;
        controller.animator = animator;
    }
}

/// Advance every controller by one tick and hand the displacement to the
/// mover.
///
/// The grounded flag used for jump and ground-stick gating is read from the
/// backend before the move, i.e. it reflects the previous tick's move.
pub fn advance_controllers<B: LocomotionBackend>(world: &mut World) {
    let dt = B::delta_seconds(world);
    if dt <= 0.0 {
        return;
    }

    let entities: Vec<Entity> = world
        .query_filtered::<Entity, With<LocomotionController>>()
        .iter(world)
        .collect();

    let mut q_controllers = world.query::<(
        &LocomotionConfig,
        Option<&mut LocomotionIntent>,
        &mut LocomotionController,
        &mut Transform,
    )>();

    for entity in entities {
        let grounded = B::is_grounded(world, entity);

        let Ok((config, intent, mut controller, mut transform)) =
            q_controllers.get_mut(world, entity)
        else {
            continue;
        };

        let input = intent
            .map(|mut intent| LocomotionInput {
                look: intent.take_look(),
                movement: intent.movement,
                run: intent.run,
                jump: intent.take_jump_edge(),
            })
            .unwrap_or_default();

        controller.set_grounded(grounded);
        let step = controller.advance(config, &input, &mut transform, dt);
        let viewpoint = controller.viewpoint;

        if let Some(mut camera) = viewpoint.and_then(|v| world.get_mut::<Transform>(v)) {
            camera.rotation = step.camera_rotation;
        }

        B::submit_displacement(world, entity, step.displacement);

        let grounded = B::is_grounded(world, entity);
        if let Some(mut controller) = world.get_mut::<LocomotionController>(entity) {
            controller.set_grounded(grounded);
        }
    }
}

/// Forward locomotion state to attached animation sinks.
pub fn publish_animation_parameters(
    q_controllers: Query<&LocomotionController>,
    mut q_sinks: Query<&mut AnimationParameters>,
) {
    for controller in &q_controllers {
        let Some(animator) = controller.animator else {
            continue;
        };
        let Ok(mut params) = q_sinks.get_mut(animator) else {
            continue;
        };
        publish_locomotion(
            &mut *params,
            controller.speed(),
            controller.running,
            controller.grounded,
        );
    }
}

/// Keep [`Grounded`] / [`Airborne`] markers in sync with the mover report.
pub fn sync_state_markers(
    mut commands: Commands,
    q_controllers: Query<(Entity, &LocomotionController, Has<Grounded>, Has<Airborne>)>,
) {
    for (entity, controller, has_grounded, has_airborne) in &q_controllers {
        if controller.grounded {
            if !has_grounded {
                commands.entity(entity).insert(Grounded);
            }
            if has_airborne {
                commands.entity(entity).remove::<Airborne>();
            }
        } else {
            if !has_airborne {
                commands.entity(entity).insert(Airborne);
            }
            if has_grounded {
                commands.entity(entity).remove::<Grounded>();
            }
        }
    }
}
