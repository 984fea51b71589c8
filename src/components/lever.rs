use bevy_ecs::prelude::{Component, Entity};

/// Wall lever that toggles a door when the player interacts with it from
/// inside the lever's trigger zone.
///
/// `door` is a plain handle to the controlled door; the lever does not own it.
#[derive(Component, Clone, Copy, Debug)]
pub struct LeverSwitch {
    pub door: Entity,
    pub pulled: bool,
}

impl LeverSwitch {
    pub fn new(door: Entity) -> Self {
        Self {
            door,
            pulled: false,
        }
    }

    /// Flip the lever, returning the animation trigger to fire.
    pub fn flip(&mut self) -> &'static str {
        self.pulled = !self.pulled;
        if self.pulled { "pull" } else { "release" }
    }
}
