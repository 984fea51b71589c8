//! Per-frame input resources.
//!
//! The host writes raw key and mouse state into [`RawInput`]; the input
//! system turns that into edge-aware [`InputState`] once per frame. Key names
//! are plain lowercase strings (`"w"`, `"space"`, `"mouse0"`), so any backend
//! that can name its keys can drive the level.
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::events::input::InputAction;
use crate::resources::levelconfig::KeyBindings;

/// Raw device state as reported by the host this frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct RawInput {
    keys_down: FxHashSet<String>,
    /// Mouse movement since the last frame, in pixels.
    pub mouse_delta: Vec2,
}

impl RawInput {
    pub fn press(&mut self, key: &str) {
        self.keys_down.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.keys_down.remove(&key.to_lowercase());
    }

    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }
}

#[derive(Debug, Clone, Default)]
/// Boolean key state with an associated key binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: String,
}

impl BoolState {
    pub fn bound_to(key: &str) -> Self {
        Self {
            key_binding: key.to_lowercase(),
            ..Self::default()
        }
    }

    /// Feed this frame's down state and recompute the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame state of every logical action.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub forward: BoolState,
    pub back: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    pub interact: BoolState,
    pub skip: BoolState,
    pub cursor_release: BoolState,
    pub cursor_capture: BoolState,
    /// Mouse movement consumed this frame.
    pub mouse_delta: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

impl InputState {
    pub fn from_bindings(keys: &KeyBindings) -> Self {
        Self {
            forward: BoolState::bound_to(&keys.forward),
            back: BoolState::bound_to(&keys.back),
            left: BoolState::bound_to(&keys.left),
            right: BoolState::bound_to(&keys.right),
            interact: BoolState::bound_to(&keys.interact),
            skip: BoolState::bound_to(&keys.skip),
            cursor_release: BoolState::bound_to(&keys.cursor_release),
            cursor_capture: BoolState::bound_to(&keys.cursor_capture),
            mouse_delta: Vec2::ZERO,
        }
    }

    pub fn actions_mut(&mut self) -> [(InputAction, &mut BoolState); 8] {
        [
            (InputAction::MoveForward, &mut self.forward),
            (InputAction::MoveBack, &mut self.back),
            (InputAction::MoveLeft, &mut self.left),
            (InputAction::MoveRight, &mut self.right),
            (InputAction::Interact, &mut self.interact),
            (InputAction::Skip, &mut self.skip),
            (InputAction::CursorRelease, &mut self.cursor_release),
            (InputAction::CursorCapture, &mut self.cursor_capture),
        ]
    }

    /// Planar movement intent: `x` is strafe (right positive), `y` is
    /// forward. Opposite keys cancel.
    pub fn move_axis(&self) -> Vec2 {
        let axis = |pos: &BoolState, neg: &BoolState| {
            (pos.active as i8 - neg.active as i8) as f32
        };
        Vec2::new(axis(&self.right, &self.left), axis(&self.forward, &self.back))
    }
}
