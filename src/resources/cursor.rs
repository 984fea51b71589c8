use bevy_ecs::prelude::Resource;

/// Whether the host should hide and capture the mouse cursor. Mouse look
/// only applies while locked.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorLock {
    pub locked: bool,
}

impl Default for CursorLock {
    fn default() -> Self {
        Self { locked: true }
    }
}
