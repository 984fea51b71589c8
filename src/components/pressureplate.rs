use bevy_ecs::prelude::{Component, Entity};

/// Floor button that holds a door open while something stands on it.
///
/// The first visitor to step on requests `Open`; the last one to step off
/// requests `Close`, unless the plate latches.
#[derive(Component, Clone, Copy, Debug)]
pub struct PressurePlate {
    pub door: Entity,
    /// Stay pressed once triggered.
    pub latch: bool,
    pub pressed: bool,
}

impl PressurePlate {
    pub fn new(door: Entity) -> Self {
        Self {
            door,
            latch: false,
            pressed: false,
        }
    }

    pub fn latching(mut self) -> Self {
        self.latch = true;
        self
    }
}
