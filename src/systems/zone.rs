//! Trigger zone detection.
//!
//! Overlap testing runs against every visitor (an entity with a
//! [`Group`] and a [`MapPosition`]) whose group matches the zone. Zones are
//! point-in-box tests; visitors have no extent of their own.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::triggerzone::{TriggerZone, ZoneOccupancy};
use crate::events::zone::{ZoneEntered, ZoneExited};

/// Refresh every zone's occupancy and trigger one event per transition.
///
/// Occupants that were despawned since the last frame simply stop matching
/// and produce a [`ZoneExited`].
pub fn zone_detection_system(
    mut zones: Query<(Entity, &MapPosition, &TriggerZone, &mut ZoneOccupancy)>,
    visitors: Query<(Entity, &MapPosition, &Group), Without<TriggerZone>>,
    mut commands: Commands,
) {
    for (zone_entity, zone_pos, zone, mut occupancy) in zones.iter_mut() {
        let inside: FxHashSet<Entity> = visitors
            .iter()
            .filter(|(_, pos, group)| group.is(&zone.accepts) && zone.contains(zone_pos.pos, pos.pos))
            .map(|(entity, _, _)| entity)
            .collect();

        if inside.len() == occupancy.count() && inside.iter().all(|e| occupancy.contains(*e)) {
            continue;
        }

        let (entered, exited) = occupancy.replace(inside);
        for visitor in exited {
            log::debug!("{:?} left zone {:?}", visitor, zone_entity);
            commands.trigger(ZoneExited {
                zone: zone_entity,
                visitor,
            });
        }
        for visitor in entered {
            log::debug!("{:?} entered zone {:?}", visitor, zone_entity);
            commands.trigger(ZoneEntered {
                zone: zone_entity,
                visitor,
            });
        }
    }
}
