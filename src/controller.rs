//! Runtime state and the per-tick locomotion step.
//!
//! [`LocomotionController::advance`] is a pure function of the controller
//! state, its config, one tick of input and the body transform. The ECS
//! systems in [`crate::systems`] wrap it with the mover round-trip.

use bevy::prelude::*;

use crate::config::LocomotionConfig;
use crate::intent::LocomotionIntent;

/// One tick of input, already reduced to what the step needs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionInput {
    /// Look delta for this tick (x = turn right, y = look up).
    pub look: Vec2,
    /// Move axis (x = strafe right, y = forward).
    pub movement: Vec2,
    /// Run held.
    pub run: bool,
    /// Jump went from released to held this tick.
    pub jump: bool,
}

/// Result of one [`LocomotionController::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    /// Local rotation to assign to the viewpoint (pure pitch).
    pub camera_rotation: Quat,
    /// Horizontal velocity for this tick (y is always zero).
    pub horizontal_velocity: Vec3,
    /// Displacement to submit to the mover.
    pub displacement: Vec3,
    /// Whether a jump was launched this tick.
    pub jumped: bool,
}

/// Runtime state of a first-person locomotion controller.
///
/// Tunables live in [`LocomotionConfig`]; this component only holds what
/// changes from tick to tick, plus the viewpoint and animator references
/// resolved once when the controller is activated.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
#[require(LocomotionConfig, LocomotionIntent, Transform)]
pub struct LocomotionController {
    /// Vertical velocity carried across ticks (m/s).
    pub vertical_velocity: f32,
    /// Cumulative pitch in degrees, kept inside the configured range.
    pub pitch: f32,
    /// Grounded flag reported by the mover after the last submitted move.
    pub grounded: bool,
    /// Whether run was held on the last tick.
    pub running: bool,
    /// Horizontal velocity from the last tick.
    pub horizontal_velocity: Vec3,
    /// Displacement submitted on the last tick.
    pub displacement: Vec3,
    /// Node receiving the pitch rotation, if any.
    pub viewpoint: Option<Entity>,
    /// Entity receiving animation parameters, if any.
    pub animator: Option<Entity>,
}

impl LocomotionController {
    /// Create a new controller at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with an explicit viewpoint node.
    pub fn with_viewpoint(viewpoint: Entity) -> Self {
        Self {
            viewpoint: Some(viewpoint),
            ..default()
        }
    }

    /// Horizontal speed from the last tick.
    pub fn speed(&self) -> f32 {
        Vec2::new(self.horizontal_velocity.x, self.horizontal_velocity.z).length()
    }

    /// Record the grounded flag reported by the mover.
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    /// Advance the controller by one tick.
    ///
    /// Rotates `body` around the world up axis, updates pitch and vertical
    /// velocity, and returns the displacement to hand to the mover. Ground
    /// gating uses [`grounded`](Self::grounded) as it stands on entry, which is
    /// the mover's answer for the previous tick's move.
    ///
    /// `dt` must be positive. A non-finite look delta is dropped for the
    /// tick so pitch stays inside the configured range.
    pub fn advance(
        &mut self,
        config: &LocomotionConfig,
        input: &LocomotionInput,
        body: &mut Transform,
        dt: f32,
    ) -> LocomotionStep {
        let look = if input.look.is_finite() {
            input.look
        } else {
            Vec2::ZERO
        };

        // Yaw: positive look.x turns right, i.e. clockwise seen from above.
        let yaw = -(look.x * config.mouse_sensitivity).to_radians();
        body.rotate_y(yaw);

        // Pitch: positive pitch looks down.
        self.pitch = config.clamp_pitch(self.pitch - look.y * config.mouse_sensitivity);
        let camera_rotation = Quat::from_rotation_x(-self.pitch.to_radians());

        let right = flatten(body.right().as_vec3());
        let forward = flatten(body.forward().as_vec3());
        let direction = (right * input.movement.x + forward * input.movement.y).normalize_or_zero();

        let horizontal_velocity = direction * config.speed(input.run);

        if self.grounded && self.vertical_velocity < 0.0 {
            self.vertical_velocity = config.ground_stick_velocity;
        }

        let jumped = input.jump && self.grounded;
        if jumped {
            self.vertical_velocity = config.jump_velocity();
        }

        self.vertical_velocity += config.gravity * dt;

        let displacement = Vec3::new(
            horizontal_velocity.x,
            self.vertical_velocity,
            horizontal_velocity.z,
        ) * dt;

        self.running = input.run;
        self.horizontal_velocity = horizontal_velocity;
        self.displacement = displacement;

        LocomotionStep {
            camera_rotation,
            horizontal_velocity,
            displacement,
            jumped,
        }
    }
}

#[inline]
fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
