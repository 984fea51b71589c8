//! First-person movement and mouse look.
use bevy_ecs::prelude::*;

use crate::components::disabled::Disabled;
use crate::components::mapposition::MapPosition;
use crate::components::player::{FirstPersonController, LookAngles};
use crate::resources::cursor::CursorLock;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Apply mouse look (only while the cursor is locked) and walk along the
/// facing direction on the XZ plane.
pub fn first_person_system(
    input: Res<InputState>,
    cursor: Res<CursorLock>,
    time: Res<WorldTime>,
    mut players: Query<
        (&FirstPersonController, &mut LookAngles, &mut MapPosition),
        Without<Disabled>,
    >,
) {
    for (controller, mut look, mut position) in players.iter_mut() {
        if cursor.locked {
            let delta = input.mouse_delta * controller.mouse_sensitivity;
            look.yaw = (look.yaw - delta.x).rem_euclid(360.0);
            look.pitch = (look.pitch - delta.y)
                .clamp(-controller.pitch_limit, controller.pitch_limit);
        }

        let axis = input.move_axis();
        if axis == glam::Vec2::ZERO {
            continue;
        }
        let direction = (look.forward() * axis.y + look.right() * axis.x).normalize_or_zero();
        position.pos += direction * controller.move_speed * time.delta;
    }
}
