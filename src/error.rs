//! Error types.
//!
//! Only configuration can fail. Runtime behavior never errors: missing
//! optional pieces (no clip, no trigger) are no-ops, and an entity whose
//! required setup is broken is disabled instead of failing every frame.

use bevy_ecs::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("door has no panels assigned")]
    NoPanels,

    #[error("door panel {0:?} has no MapPosition")]
    MissingPanelPosition(Entity),

    #[error("invalid value for [{section}] {key}: {value}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    #[error("failed to parse ini: {0}")]
    Ini(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
