//! Trigger zone occupancy events.
//!
//! [`zone_detection_system`](crate::systems::zone::zone_detection_system)
//! triggers exactly one [`ZoneEntered`] when a visitor of the accepted group
//! moves into a zone and one [`ZoneExited`] when it leaves (or is despawned).
//! A host with its own physics can trigger these directly instead.
//!
//! Observers see the zone's [`ZoneOccupancy`](crate::components::triggerzone::ZoneOccupancy)
//! already updated for the transition.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneEntered {
    pub zone: Entity,
    pub visitor: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneExited {
    pub zone: Entity,
    pub visitor: Entity,
}
