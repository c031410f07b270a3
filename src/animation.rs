//! Animation parameter sink.
//!
//! Locomotion state is forwarded to the animation side as named parameters,
//! the same shape an animation graph consumes. Attaching a sink is optional;
//! without one the publish step does nothing.

use std::collections::HashMap;

use bevy::prelude::*;

/// Horizontal speed in m/s (0 when idle, up to the run speed).
pub const SPEED_PARAM: &str = "Speed";
/// Whether the run input is held.
pub const IS_RUNNING_PARAM: &str = "IsRunning";
/// Whether the mover reports ground contact.
pub const IS_GROUNDED_PARAM: &str = "IsGrounded";

/// Something that accepts named animation parameters.
pub trait AnimationSink {
    /// Set a scalar parameter.
    fn set_float(&mut self, name: &str, value: f32);

    /// Set a boolean parameter.
    fn set_bool(&mut self, name: &str, value: bool);
}

/// Named parameter store read by an animation graph.
#[derive(Component, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Component)]
pub struct AnimationParameters {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
}

impl AnimationParameters {
    /// Create an empty parameter store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a scalar parameter.
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    /// Read a boolean parameter.
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }
}

impl AnimationSink for AnimationParameters {
    fn set_float(&mut self, name: &str, value: f32) {
        match self.floats.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.floats.insert(name.to_owned(), value);
            }
        }
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        match self.bools.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.bools.insert(name.to_owned(), value);
            }
        }
    }
}

/// Explicit animator assignment for a controller entity.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct AnimatorLink(pub Entity);

/// Write one tick of locomotion state into a sink.
pub fn publish_locomotion(sink: &mut impl AnimationSink, speed: f32, running: bool, grounded: bool) {
    sink.set_float(SPEED_PARAM, speed);
    sink.set_bool(IS_RUNNING_PARAM, running);
    sink.set_bool(IS_GROUNDED_PARAM, grounded);
}
