use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of an entity (Y up).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec3,
}

impl MapPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}

impl From<Vec3> for MapPosition {
    fn from(pos: Vec3) -> Self {
        Self { pos }
    }
}
