//! Door systems.
//!
//! - [`door_init_system`] turns each new [`DoorSetup`] into a [`Door`] or
//!   marks it [`Disabled`].
//! - [`door_request_observer`] applies [`DoorRequest`]s from levers, plates,
//!   and the host.
//! - [`door_tick_system`] advances motion, moves the panel entities, and
//!   triggers [`DoorStateChanged`].
//!
//! # System Ordering
//!
//! `door_init_system` runs before anything that can request a door, and
//! `door_tick_system` after the controllers so a request made this frame
//! already moves the panels this frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::components::disabled::Disabled;
use crate::components::door::{Door, DoorSetup};
use crate::components::mapposition::MapPosition;
use crate::events::door::{DoorRequest, DoorStateChanged};
use crate::resources::levelconfig::LevelConfig;
use crate::resources::worldtime::WorldTime;
use crate::sequencer::DEFAULT_EPSILON;
use crate::systems::presentation::Presenter;

/// Read panel rest positions for every door that has not been set up yet.
pub fn door_init_system(
    setups: Query<(Entity, &DoorSetup), (Without<Door>, Without<Disabled>)>,
    positions: Query<&MapPosition>,
    config: Option<Res<LevelConfig>>,
    mut commands: Commands,
) {
    let epsilon = config.map_or(DEFAULT_EPSILON, |c| c.sequencer_epsilon);
    for (entity, setup) in setups.iter() {
        match Door::from_setup(setup, |panel| positions.get(panel).ok().map(|p| p.pos), epsilon) {
            Ok(door) => {
                info!("Door {:?} ready with {} panel(s)", entity, door.panels.len());
                commands.entity(entity).insert(door);
            }
            Err(err) => {
                error!("Door {:?} disabled: {}", entity, err);
                commands.entity(entity).insert(Disabled);
            }
        }
    }
}

/// Start the requested action on the addressed door.
pub fn door_request_observer(
    trigger: On<DoorRequest>,
    mut doors: Query<&mut Door, Without<Disabled>>,
    mut panels: Query<&mut MapPosition>,
    mut presenter: Presenter,
) {
    let request = *trigger.event();
    let Ok(mut door) = doors.get_mut(request.door) else {
        warn!(
            "Ignoring {:?} for {:?}: not an active door",
            request.action, request.door
        );
        return;
    };
    let outcome = door.request(request.action, &mut presenter.for_entity(request.door));
    mirror_panels(&door, &mut panels);
    if let Some(previous) = outcome.preempted {
        info!(
            "Door {:?}: {:?} interrupted by {:?}",
            request.door, previous, outcome.resolved
        );
    }
    log::debug!(
        "Door {:?}: {:?} resolved to {:?} (moving: {})",
        request.door,
        request.action,
        outcome.resolved,
        outcome.started
    );
}

/// Advance every door, mirror panel positions, and report state changes.
pub fn door_tick_system(
    mut doors: Query<(Entity, &mut Door), Without<Disabled>>,
    mut panels: Query<&mut MapPosition>,
    time: Res<WorldTime>,
    mut presenter: Presenter,
    mut commands: Commands,
) {
    for (entity, mut door) in doors.iter_mut() {
        let moving = door.is_moving();
        if moving {
            door.tick(time.delta, &mut presenter.for_entity(entity));
        }
        let change = door.refresh_state();
        if moving || change.is_some() {
            mirror_panels(&door, &mut panels);
        }
        if let Some((from, to)) = change {
            info!("Door {:?}: {:?} -> {:?}", entity, from, to);
            commands.trigger(DoorStateChanged {
                door: entity,
                from,
                to,
            });
        }
    }
}

fn mirror_panels(door: &Door, panels: &mut Query<&mut MapPosition>) {
    for (panel, pos) in door.panels.iter().zip(door.panel_positions()) {
        if let Ok(mut panel_pos) = panels.get_mut(panel.entity) {
            panel_pos.pos = *pos;
        }
    }
}
