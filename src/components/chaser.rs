//! Enemy that runs straight at the player.
//!
//! Navigation is out of scope: the chaser moves on the XZ plane in a straight
//! line toward the nearest visitor of its target group that is inside
//! `detect_radius`, and walks back to `home` otherwise. Reaching
//! `catch_radius` downs the target once per contact.

use bevy_ecs::prelude::Component;
use glam::Vec3;

#[derive(Component, Clone, Debug)]
pub struct Chaser {
    pub target_group: String,
    pub speed: f32,
    pub detect_radius: f32,
    pub catch_radius: f32,
    pub home: Vec3,
    /// Set while the current target is within catch radius.
    pub caught: bool,
}

impl Chaser {
    pub fn new(home: Vec3, speed: f32, detect_radius: f32, catch_radius: f32) -> Self {
        Self {
            target_group: "player".to_string(),
            speed,
            detect_radius,
            catch_radius,
            home,
            caught: false,
        }
    }
}

/// Distance between two points ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let d = b - a;
    (d.x * d.x + d.z * d.z).sqrt()
}
