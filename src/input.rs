//! Keyboard and mouse input gathering.
//!
//! Entities marked with [`PlayerInput`] get their [`LocomotionIntent`]
//! filled from Bevy's keyboard state and accumulated mouse motion. Other
//! input sources can skip this module and write the intent themselves.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::intent::LocomotionIntent;

/// Marker for controllers driven by the local keyboard and mouse.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct PlayerInput;

/// Key bindings for the built-in input gatherer.
///
/// Bindings are enabled while at least one controller is active and
/// disabled when the last one is removed. While disabled, player intents are
/// held neutral.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    /// Move forward (default `W`).
    pub forward: KeyCode,
    /// Move backward (default `S`).
    pub back: KeyCode,
    /// Strafe left (default `A`).
    pub left: KeyCode,
    /// Strafe right (default `D`).
    pub right: KeyCode,
    /// Held to run instead of walk (default left `Shift`).
    pub run: KeyCode,
    /// Jump, triggered on press (default `Space`).
    pub jump: KeyCode,
    /// Whether the gatherer reads devices at all.
    pub enabled: bool,
    /// Number of active controllers holding the bindings enabled.
    pub(crate) active_controllers: usize,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            run: KeyCode::ShiftLeft,
            jump: KeyCode::Space,
            enabled: false,
            active_controllers: 0,
        }
    }
}

impl InputBindings {
    /// Register an activated controller and enable the bindings.
    pub fn acquire(&mut self) {
        self.active_controllers += 1;
        self.enabled = true;
    }

    /// Unregister a controller. Returns `true` if it was the last one, in
    /// which case the bindings are disabled.
    pub fn release(&mut self) -> bool {
        self.active_controllers = self.active_controllers.saturating_sub(1);
        if self.active_controllers == 0 {
            self.enabled = false;
            true
        } else {
            false
        }
    }

    /// Number of controllers currently holding the bindings.
    pub fn active_controllers(&self) -> usize {
        self.active_controllers
    }

    /// Move axis from the held keys (x = strafe, y = forward). Each component
    /// is -1, 0 or 1; opposing keys cancel.
    pub fn move_axis(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let axis = |positive: KeyCode, negative: KeyCode| {
            keys.pressed(positive) as i8 as f32 - keys.pressed(negative) as i8 as f32
        };
        Vec2::new(
            axis(self.right, self.left),
            axis(self.forward, self.back),
        )
    }
}

/// Fill player intents from keyboard and mouse.
///
/// Mouse motion is reported with y pointing down; it is flipped so that a
/// positive look y means looking up.
pub fn gather_player_input(
    bindings: Res<InputBindings>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<AccumulatedMouseMotion>>,
    mut q_intents: Query<&mut LocomotionIntent, With<PlayerInput>>,
) {
    for mut intent in &mut q_intents {
        if !bindings.enabled {
            intent.clear();
            continue;
        }

        if let Some(mouse) = mouse.as_deref() {
            intent.add_look(Vec2::new(mouse.delta.x, -mouse.delta.y));
        }

        match keys.as_deref() {
            Some(keys) => {
                intent.set_movement(bindings.move_axis(keys));
                intent.set_running(keys.pressed(bindings.run));
                intent.set_jump_pressed(keys.pressed(bindings.jump));
            }
            None => {
                intent.set_movement(Vec2::ZERO);
                intent.set_running(false);
                intent.set_jump_pressed(false);
            }
        }
    }
}
