//! Lever system.
//!
//! Levers are flipped with the interact key while a player stands in their
//! zone. Each flip plays the lever animation and toggles the linked door.
use bevy_ecs::prelude::*;

use crate::components::disabled::Disabled;
use crate::components::door::DoorAction;
use crate::components::lever::LeverSwitch;
use crate::components::triggerzone::ZoneOccupancy;
use crate::events::door::DoorRequest;
use crate::presentation::PresentationSink;
use crate::resources::input::InputState;
use crate::systems::presentation::Presenter;

/// Flip every lever the player is standing at when interact goes down, and
/// toggle its door.
pub fn lever_system(
    input: Res<InputState>,
    mut levers: Query<(Entity, &mut LeverSwitch, &ZoneOccupancy), Without<Disabled>>,
    mut presenter: Presenter,
    mut commands: Commands,
) {
    if !input.interact.just_pressed {
        return;
    }
    for (entity, mut lever, occupancy) in levers.iter_mut() {
        if !occupancy.is_occupied() {
            continue;
        }
        let animation = lever.flip();
        log::info!("Lever {:?} {} -> door {:?}", entity, animation, lever.door);
        presenter.for_entity(entity).fire_trigger(animation);
        commands.trigger(DoorRequest {
            door: lever.door,
            action: DoorAction::Toggle,
        });
    }
}
