//! Controller configuration components.
//!
//! This module defines the tunables for a locomotion controller: horizontal
//! speeds, gravity and jump height, look sensitivity and the pitch range of
//! the viewpoint.

use bevy::prelude::*;

/// Vertical velocity applied while grounded and descending.
///
/// Kept slightly negative so the mover keeps reporting ground contact on the
/// next sweep instead of flickering between grounded and airborne.
pub const DEFAULT_GROUND_STICK_VELOCITY: f32 = -2.0;

/// Configuration parameters for the locomotion controller.
///
/// Units are meters, seconds and degrees. Look sensitivity is expressed in
/// degrees of rotation per unit of look input, where look input is the delta
/// accumulated over one tick (mouse motion in pixels, or any other source
/// writing [`LocomotionIntent::look`](crate::intent::LocomotionIntent)).
/// The delta is *not* scaled by the frame time.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocomotionConfig {
    // === Movement Settings ===
    /// Horizontal speed while walking (m/s).
    pub walk_speed: f32,

    /// Horizontal speed while the run input is held (m/s).
    pub run_speed: f32,

    // === Vertical Settings ===
    /// Constant vertical acceleration (m/s^2). Must be negative.
    pub gravity: f32,

    /// Apex height of a jump above the take-off point (m).
    pub jump_height: f32,

    /// Vertical velocity forced while grounded and descending (m/s).
    pub ground_stick_velocity: f32,

    // === Look Settings ===
    /// Degrees of rotation per unit of look input.
    pub mouse_sensitivity: f32,

    /// Lowest allowed cumulative pitch, in degrees (negative looks up).
    pub min_pitch: f32,

    /// Highest allowed cumulative pitch, in degrees (positive looks down).
    pub max_pitch: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.5,
            run_speed: 6.0,
            gravity: -9.81,
            jump_height: 1.2,
            ground_stick_velocity: DEFAULT_GROUND_STICK_VELOCITY,
            mouse_sensitivity: 0.1,
            min_pitch: -75.0,
            max_pitch: 75.0,
        }
    }
}

impl LocomotionConfig {
    /// Preset for a player-controlled character.
    pub fn player() -> Self {
        Self::default()
    }

    /// Preset with faster ground speeds and a higher jump.
    pub fn sprinter() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 9.0,
            jump_height: 1.6,
            ..default()
        }
    }

    /// Set walk and run speeds.
    pub fn with_speeds(mut self, walk: f32, run: f32) -> Self {
        self.walk_speed = walk;
        self.run_speed = run;
        self
    }

    /// Set the walk speed.
    pub fn with_walk_speed(mut self, speed: f32) -> Self {
        self.walk_speed = speed;
        self
    }

    /// Set the run speed.
    pub fn with_run_speed(mut self, speed: f32) -> Self {
        self.run_speed = speed;
        self
    }

    /// Set the gravity acceleration.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the jump apex height.
    pub fn with_jump_height(mut self, height: f32) -> Self {
        self.jump_height = height;
        self
    }

    /// Set the look sensitivity (degrees per input unit).
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Set the pitch range in degrees.
    ///
    /// The bounds are swapped if given in the wrong order.
    pub fn with_pitch_range(mut self, min: f32, max: f32) -> Self {
        self.min_pitch = min.min(max);
        self.max_pitch = min.max(max);
        self
    }

    /// Set the grounded downward bias.
    pub fn with_ground_stick_velocity(mut self, velocity: f32) -> Self {
        self.ground_stick_velocity = velocity;
        self
    }

    /// Horizontal speed for the given run state.
    #[inline]
    pub fn speed(&self, running: bool) -> f32 {
        if running {
            self.run_speed
        } else {
            self.walk_speed
        }
    }

    /// Take-off velocity needed to reach `jump_height` under `gravity`.
    ///
    /// Only meaningful while `gravity < 0`; otherwise the result is NaN (or
    /// zero for zero gravity) and is passed through unchanged.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Clamp a pitch value into the configured range.
    #[inline]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(self.min_pitch, self.max_pitch)
    }

    /// List configuration values that break the controller's preconditions.
    ///
    /// Returns an empty list for a usable config. Nothing here is enforced at
    /// runtime; the activation hook logs each entry as a warning.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.gravity < 0.0) {
            problems.push(format!(
                "gravity must be negative for jumps to work, got {}",
                self.gravity
            ));
        }
        if !(self.jump_height >= 0.0) {
            problems.push(format!(
                "jump_height must not be negative, got {}",
                self.jump_height
            ));
        }
        if !(self.walk_speed > 0.0) || !(self.run_speed > 0.0) {
            problems.push(format!(
                "speeds must be positive, got walk={} run={}",
                self.walk_speed, self.run_speed
            ));
        }
        if !(self.mouse_sensitivity > 0.0) {
            problems.push(format!(
                "mouse_sensitivity must be positive, got {}",
                self.mouse_sensitivity
            ));
        }
        if !(self.min_pitch <= self.max_pitch) {
            problems.push(format!(
                "pitch range is inverted: [{}, {}]",
                self.min_pitch, self.max_pitch
            ));
        }
        problems
    }
}
