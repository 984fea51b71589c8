//! Hazards and respawning.
//!
//! Entering a [`Hazard`] zone downs the visitor; [`respawn_observer`] handles
//! every [`PlayerDowned`], whether from a hazard or a chaser.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::hazard::Hazard;
use crate::components::mapposition::MapPosition;
use crate::components::player::LookAngles;
use crate::events::player::{DownCause, PlayerDowned};
use crate::events::zone::ZoneEntered;
use crate::resources::respawn::RespawnPoint;

pub fn hazard_observer(
    trigger: On<ZoneEntered>,
    hazards: Query<(), With<Hazard>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if hazards.contains(event.zone) {
        commands.trigger(PlayerDowned {
            player: event.visitor,
            cause: DownCause::Hazard,
        });
    }
}

/// Put a downed player back at the respawn point, facing its yaw.
pub fn respawn_observer(
    trigger: On<PlayerDowned>,
    mut players: Query<(&mut MapPosition, Option<&mut LookAngles>)>,
    respawn: Res<RespawnPoint>,
) {
    let event = trigger.event();
    let Ok((mut position, look)) = players.get_mut(event.player) else {
        log::warn!("Downed entity {:?} has no position", event.player);
        return;
    };
    log::info!(
        "{:?} downed ({:?}), respawning at {}",
        event.player,
        event.cause,
        respawn.position
    );
    position.pos = respawn.position;
    if let Some(mut look) = look {
        look.yaw = respawn.yaw;
        look.pitch = 0.0;
    }
}
