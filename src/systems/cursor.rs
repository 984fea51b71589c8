//! Cursor lock observer.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::cursor::CursorLock;

/// Release the cursor on `CursorRelease`, capture it on `CursorCapture`.
pub fn cursor_lock_observer(trigger: On<InputEvent>, mut cursor: ResMut<CursorLock>) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    let locked = match event.action {
        InputAction::CursorRelease => false,
        InputAction::CursorCapture => true,
        _ => return,
    };
    if cursor.locked != locked {
        cursor.locked = locked;
        log::info!("Cursor {}", if locked { "captured" } else { "released" });
    }
}
