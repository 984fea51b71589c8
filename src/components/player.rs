use bevy_ecs::prelude::Component;
use glam::Vec3;

/// First-person walking and mouse look parameters.
#[derive(Component, Clone, Copy, Debug)]
pub struct FirstPersonController {
    /// Units per second.
    pub move_speed: f32,
    /// Degrees per unit of mouse delta.
    pub mouse_sensitivity: f32,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
}

/// Camera orientation in degrees. Yaw 0 looks down -Z, positive yaw turns
/// left.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct LookAngles {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookAngles {
    /// Horizontal facing direction.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
    }

    /// Horizontal right-hand direction.
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        Vec3::new(yaw.cos(), 0.0, -yaw.sin())
    }

    /// Yaw that faces along `direction` on the XZ plane.
    pub fn yaw_towards(direction: Vec3) -> f32 {
        (-direction.x).atan2(-direction.z).to_degrees()
    }
}
