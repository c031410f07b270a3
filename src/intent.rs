//! Locomotion intent component.
//!
//! Intents represent the desired look and movement from player input or AI.
//! The controller systems read these intents once per tick and turn them
//! into rotations and a displacement for the mover.

use bevy::prelude::*;

/// Per-tick input for a locomotion controller.
///
/// Any input source can write this component: the built-in keyboard/mouse
/// gatherer, a gamepad mapping, AI, or network replication.
///
/// # Example
///
/// ```rust
/// use bevy::prelude::*;
/// use fps_locomotion::prelude::*;
///
/// let mut intent = LocomotionIntent::new();
/// intent.set_movement(Vec2::new(0.0, 1.0));
/// intent.set_running(true);
/// assert!(intent.is_moving());
///
/// intent.clear();
/// assert!(!intent.is_moving());
/// ```
#[derive(Component, Reflect, Debug, Clone, Copy, Default, PartialEq)]
#[reflect(Component)]
pub struct LocomotionIntent {
    /// Look delta accumulated for this tick (x = turn right, y = look up).
    ///
    /// Consumed by the controller every tick; sources that write it must
    /// write a fresh delta each tick.
    pub look: Vec2,
    /// Move axis (x = strafe right, y = forward). Each component in [-1, 1].
    pub movement: Vec2,
    /// Whether the run input is held.
    pub run: bool,
    /// Whether the jump input is currently held.
    ///
    /// Set the level every tick; the controller derives the press edge itself,
    /// so holding jump only triggers a single jump.
    pub jump_pressed: bool,
    /// Previous tick's `jump_pressed` state (for edge detection).
    /// This is managed internally by the controller.
    pub(crate) jump_pressed_prev: bool,
}

impl LocomotionIntent {
    /// Create a new neutral intent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to the look delta for this tick.
    pub fn add_look(&mut self, delta: Vec2) {
        self.look += delta;
    }

    /// Set the move axis. Components are clamped to [-1, 1].
    pub fn set_movement(&mut self, axis: Vec2) {
        self.movement = axis.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Set the run state.
    pub fn set_running(&mut self, running: bool) {
        self.run = running;
    }

    /// Set the jump level.
    ///
    /// Pass `true` while the jump input is held, `false` otherwise.
    pub fn set_jump_pressed(&mut self, pressed: bool) {
        self.jump_pressed = pressed;
    }

    /// Check if jump is currently held.
    pub fn is_jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    /// Check if there is active movement input.
    pub fn is_moving(&self) -> bool {
        self.movement != Vec2::ZERO
    }

    /// Reset look, movement, run and jump.
    ///
    /// The jump history is kept so that releasing and re-pressing is still
    /// required after a clear.
    pub fn clear(&mut self) {
        self.look = Vec2::ZERO;
        self.movement = Vec2::ZERO;
        self.run = false;
        self.jump_pressed = false;
    }

    /// Take the look delta, leaving zero behind.
    pub fn take_look(&mut self) -> Vec2 {
        std::mem::take(&mut self.look)
    }

    /// Returns `true` on the tick jump goes from released to held, then
    /// records the current level for the next tick.
    pub fn take_jump_edge(&mut self) -> bool {
        let edge = self.jump_pressed && !self.jump_pressed_prev;
        self.jump_pressed_prev = self.jump_pressed;
        edge
    }
}
