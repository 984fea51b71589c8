//! Glow observers and fade.
//!
//! Visitors raise a glow's target intensity until the zone empties again.
//! [`glow_tick_system`] eases the intensity toward that target every frame.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::glow::Glow;
use crate::components::triggerzone::ZoneOccupancy;
use crate::events::zone::{ZoneEntered, ZoneExited};
use crate::resources::worldtime::WorldTime;

pub fn glow_enter_observer(trigger: On<ZoneEntered>, mut glows: Query<&mut Glow>) {
    if let Ok(mut glow) = glows.get_mut(trigger.event().zone) {
        glow.brighten();
    }
}

/// Fade out once the last visitor has left.
pub fn glow_exit_observer(
    trigger: On<ZoneExited>,
    mut glows: Query<(&mut Glow, Option<&ZoneOccupancy>)>,
) {
    if let Ok((mut glow, occupancy)) = glows.get_mut(trigger.event().zone) {
        if !occupancy.is_some_and(|o| o.is_occupied()) {
            glow.dim();
        }
    }
}

pub fn glow_tick_system(time: Res<WorldTime>, mut glows: Query<&mut Glow>) {
    for mut glow in glows.iter_mut() {
        glow.tick(time.delta);
    }
}
