//! Audio commands for the host's audio backend.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// Commands sent to the host's audio playback, addressed by emitting entity.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    PlayClip {
        emitter: Entity,
        clip: String,
        looped: bool,
    },
    StopClip {
        emitter: Entity,
        clip: String,
    },
}
