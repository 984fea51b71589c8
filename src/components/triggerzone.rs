//! Axis-aligned trigger volumes.
//!
//! A [`TriggerZone`] accepts visitors of one [`Group`](super::group::Group)
//! and keeps the set of visitors currently inside in its [`ZoneOccupancy`].
//! [`zone_detection_system`](crate::systems::zone::zone_detection_system)
//! refreshes the occupancy each frame and triggers
//! [`ZoneEntered`](crate::events::zone::ZoneEntered) /
//! [`ZoneExited`](crate::events::zone::ZoneExited) once per transition.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;
use rustc_hash::FxHashSet;

#[derive(Component, Clone, Debug)]
#[require(ZoneOccupancy)]
pub struct TriggerZone {
    /// Half size of the box around the zone entity's position.
    pub half_extents: Vec3,
    /// Group name a visitor must carry to count.
    pub accepts: String,
}

impl TriggerZone {
    pub fn new(half_extents: Vec3, accepts: impl Into<String>) -> Self {
        Self {
            half_extents: half_extents.abs(),
            accepts: accepts.into(),
        }
    }

    /// Cube-shaped zone.
    pub fn cube(half_size: f32, accepts: impl Into<String>) -> Self {
        Self::new(Vec3::splat(half_size), accepts)
    }

    /// Whether `point` lies inside the zone centered on `center` (edges
    /// included).
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        let d = (point - center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y && d.z <= self.half_extents.z
    }
}

/// Visitors currently inside a zone.
#[derive(Component, Clone, Debug, Default)]
pub struct ZoneOccupancy {
    occupants: FxHashSet<Entity>,
}

impl ZoneOccupancy {
    pub fn count(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_occupied(&self) -> bool {
        !self.occupants.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.occupants.contains(&entity)
    }

    /// Replace the occupant set, returning `(entered, exited)` sorted by
    /// entity.
    pub fn replace(&mut self, inside: FxHashSet<Entity>) -> (Vec<Entity>, Vec<Entity>) {
        let mut entered: Vec<Entity> = inside.difference(&self.occupants).copied().collect();
        let mut exited: Vec<Entity> = self.occupants.difference(&inside).copied().collect();
        entered.sort();
        exited.sort();
        self.occupants = inside;
        (entered, exited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_contains_includes_edges() {
        let zone = TriggerZone::new(Vec3::new(1.0, 2.0, 1.0), "player");
        let c = Vec3::new(10.0, 0.0, 0.0);
        assert!(zone.contains(c, c));
        assert!(zone.contains(c, Vec3::new(11.0, 2.0, -1.0)));
        assert!(!zone.contains(c, Vec3::new(11.01, 0.0, 0.0)));
        assert!(!zone.contains(c, Vec3::new(10.0, -2.5, 0.0)));
    }

    #[test]
    fn test_negative_extents_are_normalized() {
        let zone = TriggerZone::new(Vec3::new(-1.0, -1.0, -1.0), "player");
        assert!(zone.contains(Vec3::ZERO, Vec3::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_replace_reports_transitions() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut occ = ZoneOccupancy::default();

        let (entered, exited) = occ.replace([a, b].into_iter().collect());
        assert_eq!(entered.len(), 2);
        assert!(exited.is_empty());
        assert_eq!(occ.count(), 2);

        let (entered, exited) = occ.replace([b].into_iter().collect());
        assert!(entered.is_empty());
        assert_eq!(exited, vec![a]);
        assert!(occ.contains(b));
        assert!(!occ.contains(a));

        let (entered, exited) = occ.replace([b].into_iter().collect());
        assert!(entered.is_empty() && exited.is_empty());
    }
}
