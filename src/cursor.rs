//! Cursor focus requests.
//!
//! Controllers ask for the pointer to be locked and hidden when they
//! activate, and released when the last one goes away. The request is an
//! event so the windowing side stays in charge of the actual window.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

/// Request to change the primary window's cursor state.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorLockRequest {
    /// Lock the cursor to the window and hide it.
    Lock,
    /// Free and show the cursor.
    Release,
}

/// Apply pending cursor requests to the primary window.
///
/// Only the last request of the frame matters. Does nothing when no primary
/// window exists (headless apps, tests).
pub fn apply_cursor_requests(
    mut requests: EventReader<CursorLockRequest>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    for mut window in &mut windows {
        match request {
            CursorLockRequest::Lock => {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
            CursorLockRequest::Release => {
                window.cursor_options.grab_mode = CursorGrabMode::None;
                window.cursor_options.visible = true;
            }
        }
    }
}
