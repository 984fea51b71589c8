use bevy_ecs::prelude::Resource;
use glam::Vec3;

/// Where a downed player comes back.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RespawnPoint {
    pub position: Vec3,
    /// Look yaw in degrees after respawning.
    pub yaw: f32,
}
