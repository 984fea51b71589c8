//! Enemy chase movement.
//!
//! Each chaser picks the nearest visitor of its target group inside
//! `detect_radius` and steps straight at it on the XZ plane. With nothing in
//! range it walks back home. Height is never changed.
use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::chaser::{Chaser, planar_distance};
use crate::components::disabled::Disabled;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::events::player::{DownCause, PlayerDowned};
use crate::resources::worldtime::WorldTime;

pub fn chaser_system(
    mut chasers: Query<(Entity, &mut Chaser, &mut MapPosition), Without<Disabled>>,
    targets: Query<(Entity, &MapPosition, &Group), Without<Chaser>>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut chaser, mut position) in chasers.iter_mut() {
        let nearest = targets
            .iter()
            .filter(|(_, _, group)| group.is(&chaser.target_group))
            .map(|(target, pos, _)| (target, pos.pos, planar_distance(position.pos, pos.pos)))
            .filter(|(_, _, dist)| *dist <= chaser.detect_radius)
            .min_by(|a, b| a.2.total_cmp(&b.2));

        let Some((target, target_pos, _)) = nearest else {
            let home = chaser.home;
            step_towards(&mut position.pos, home, chaser.speed * dt);
            chaser.caught = false;
            continue;
        };

        // Stop at the catch radius instead of walking into the target.
        let dist = planar_distance(position.pos, target_pos);
        let travel = (chaser.speed * dt).min((dist - chaser.catch_radius).max(0.0));
        step_towards(&mut position.pos, target_pos, travel);

        if planar_distance(position.pos, target_pos) <= chaser.catch_radius + 1e-4 {
            if !chaser.caught {
                chaser.caught = true;
                log::info!("Chaser {:?} caught {:?}", entity, target);
                commands.trigger(PlayerDowned {
                    player: target,
                    cause: DownCause::Caught,
                });
            }
        } else {
            chaser.caught = false;
        }
    }
}

/// Move `pos` toward `target` on the XZ plane by at most `max_step`.
fn step_towards(pos: &mut Vec3, target: Vec3, max_step: f32) {
    let mut delta = target - *pos;
    delta.y = 0.0;
    let dist = delta.length();
    if dist <= max_step {
        pos.x = target.x;
        pos.z = target.z;
    } else if dist > 0.0 {
        *pos += delta / dist * max_step;
    }
}
