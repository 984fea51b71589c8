use bevy_ecs::prelude::Component;

/// Deadly volume (deep water, lava). Anything entering its zone is downed
/// and sent back to the respawn point.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Hazard;
