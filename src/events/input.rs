//! Input action events.
//!
//! [`InputEvent`] is triggered on the frame an action's key goes down or up.
//! Holding a key does not re-trigger it.

use bevy_ecs::prelude::*;

/// Logical input actions. Key names are bound in the `[keys]` section of the
/// level config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    /// Talk to an NPC, pull a lever.
    Interact,
    /// Skip the current dialogue line.
    Skip,
    /// Free the mouse cursor.
    CursorRelease,
    /// Capture the mouse cursor for mouse look.
    CursorCapture,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
    /// True on press, false on release.
    pub pressed: bool,
}
