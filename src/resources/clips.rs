//! Clip length registry.
//!
//! The host knows its audio assets; behaviors only need their lengths to time
//! dialogue lines. Lengths can be registered in code or loaded from a JSON
//! object mapping clip ids to seconds:
//!
//! ```json
//! { "keeper_greeting": 2.4, "door_slide": 0.8 }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::error::ConfigError;

#[derive(Resource, Debug, Clone, Default)]
pub struct ClipLibrary {
    lengths: FxHashMap<String, f32>,
}

impl ClipLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(mut self, clip: impl Into<String>, seconds: f32) -> Self {
        self.insert(clip, seconds);
        self
    }

    pub fn insert(&mut self, clip: impl Into<String>, seconds: f32) {
        self.lengths.insert(clip.into(), seconds.max(0.0));
    }

    pub fn length(&self, clip: &str) -> Option<f32> {
        self.lengths.get(clip).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: FxHashMap<String, f32> = serde_json::from_str(json)?;
        let mut library = Self::new();
        for (clip, seconds) in raw {
            library.insert(clip, seconds);
        }
        Ok(library)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let lib = ClipLibrary::from_json_str(r#"{ "a": 2.0, "b": -1.0 }"#).unwrap();
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.length("a"), Some(2.0));
        assert_eq!(lib.length("b"), Some(0.0));
        assert_eq!(lib.length("c"), None);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            ClipLibrary::from_json_str("[1, 2]"),
            Err(ConfigError::Json(_))
        ));
    }
}
