//! Dialogue systems.
//!
//! [`dialogue_input_system`] starts a session when the player presses
//! interact inside an NPC's zone and skips lines on the skip key.
//! [`dialogue_tick_system`] runs line timers.
use bevy_ecs::prelude::*;

use crate::components::dialogue::DialogueSession;
use crate::components::disabled::Disabled;
use crate::components::triggerzone::ZoneOccupancy;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::presentation::Presenter;

pub fn dialogue_input_system(
    input: Res<InputState>,
    mut sessions: Query<(Entity, &mut DialogueSession, Option<&ZoneOccupancy>), Without<Disabled>>,
    mut presenter: Presenter,
) {
    let interact = input.interact.just_pressed;
    let skip = input.skip.just_pressed;
    if !interact && !skip {
        return;
    }
    for (entity, mut session, occupancy) in sessions.iter_mut() {
        if session.is_playing() {
            if skip {
                session.skip(&mut presenter.for_entity(entity));
            }
        } else if interact && occupancy.is_some_and(|o| o.is_occupied()) {
            session.start(&mut presenter.for_entity(entity));
        }
    }
}

pub fn dialogue_tick_system(
    time: Res<WorldTime>,
    mut sessions: Query<(Entity, &mut DialogueSession), Without<Disabled>>,
    mut presenter: Presenter,
) {
    for (entity, mut session) in sessions.iter_mut() {
        if session.is_playing() {
            session.tick(time.delta, &mut presenter.for_entity(entity));
        }
    }
}
