use bevy_ecs::prelude::*;

/// Why a player went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownCause {
    Hazard,
    Caught,
}

/// The player fell into a hazard or was caught. Handled by
/// [`respawn_observer`](crate::systems::hazard::respawn_observer).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDowned {
    pub player: Entity,
    pub cause: DownCause,
}
