//! Pressure plate observers.
//!
//! A plate is pressed by its first occupant and released when its zone
//! empties. Both edges are tracked on the plate itself, so several visitors
//! stepping on in the same frame still produce a single `Open`.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::disabled::Disabled;
use crate::components::door::DoorAction;
use crate::components::pressureplate::PressurePlate;
use crate::components::triggerzone::ZoneOccupancy;
use crate::events::door::DoorRequest;
use crate::presentation::PresentationSink;
use crate::events::zone::{ZoneEntered, ZoneExited};
use crate::systems::presentation::Presenter;

pub fn plate_pressed_observer(
    trigger: On<ZoneEntered>,
    mut plates: Query<&mut PressurePlate, Without<Disabled>>,
    mut presenter: Presenter,
    mut commands: Commands,
) {
    let zone = trigger.event().zone;
    let Ok(mut plate) = plates.get_mut(zone) else {
        return;
    };
    if plate.pressed {
        return;
    }
    plate.pressed = true;
    log::info!("Plate {:?} pressed -> door {:?}", zone, plate.door);
    presenter.for_entity(zone).fire_trigger("press");
    commands.trigger(DoorRequest {
        door: plate.door,
        action: DoorAction::Open,
    });
}

pub fn plate_released_observer(
    trigger: On<ZoneExited>,
    mut plates: Query<(&mut PressurePlate, Option<&ZoneOccupancy>), Without<Disabled>>,
    mut presenter: Presenter,
    mut commands: Commands,
) {
    let zone = trigger.event().zone;
    let Ok((mut plate, occupancy)) = plates.get_mut(zone) else {
        return;
    };
    if !plate.pressed || plate.latch || occupancy.is_some_and(|o| o.is_occupied()) {
        return;
    }
    plate.pressed = false;
    log::info!("Plate {:?} released -> door {:?}", zone, plate.door);
    presenter.for_entity(zone).fire_trigger("release");
    commands.trigger(DoorRequest {
        door: plate.door,
        action: DoorAction::Close,
    });
}
