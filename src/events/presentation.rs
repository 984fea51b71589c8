//! Text and animation commands for the host's presentation layer.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

#[derive(Message, Debug, Clone, PartialEq)]
pub enum PresentationCmd {
    /// Put `text` on screen as spoken by `speaker`.
    ShowText { speaker: Entity, text: String },
    ClearText { speaker: Entity },
    /// Fire a named animator trigger on `target`.
    FireTrigger { target: Entity, trigger: String },
}
