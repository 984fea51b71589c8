//! Input systems.
//!
//! - [`update_input_state`] reads the host's [`RawInput`] each frame and
//!   writes press/release edges into [`InputState`].
//! - An [`InputEvent`] is triggered for every edge, so observers such as the
//!   cursor lock react without polling.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::events::input::InputEvent;
use crate::resources::input::{InputState, RawInput};

/// Derive per-action edges from the raw key set and consume the mouse delta.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut raw: ResMut<RawInput>,
    mut commands: Commands,
) {
    for (action, state) in input.actions_mut() {
        let down = raw.is_down(&state.key_binding);
        state.update(down);
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        } else if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
    input.mouse_delta = std::mem::replace(&mut raw.mouse_delta, Vec2::ZERO);
}
