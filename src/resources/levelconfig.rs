//! Level configuration resource.
//!
//! Tuning values for every behavior, loaded from an INI file. Missing keys
//! keep their defaults, so an empty or partial file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [sequencer]
//! epsilon = 0.001
//!
//! [door]
//! open_distance = 1.2
//! speed = 1.5
//! auto_close = 0
//!
//! [dialogue]
//! min_line_duration = 1.5
//! seconds_per_char = 0.05
//! playback_rate = 1.0
//!
//! [player]
//! move_speed = 4.0
//! mouse_sensitivity = 0.1
//! pitch_limit = 85
//!
//! [chaser]
//! speed = 2.5
//! detect_radius = 10
//! catch_radius = 1
//!
//! [keys]
//! forward = w
//! back = s
//! left = a
//! right = d
//! interact = e
//! skip = space
//! cursor_release = escape
//! cursor_capture = mouse0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::dialogue::LineTiming;
use crate::error::ConfigError;
use crate::sequencer::DEFAULT_EPSILON;

const DEFAULT_DOOR_OPEN_DISTANCE: f32 = 1.2;
const DEFAULT_DOOR_SPEED: f32 = 1.5;
const DEFAULT_MIN_LINE_DURATION: f32 = 1.5;
const DEFAULT_SECONDS_PER_CHAR: f32 = 0.05;
const DEFAULT_PLAYBACK_RATE: f32 = 1.0;
const DEFAULT_MOVE_SPEED: f32 = 4.0;
const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.1;
const DEFAULT_PITCH_LIMIT: f32 = 85.0;
const DEFAULT_CHASER_SPEED: f32 = 2.5;
const DEFAULT_DETECT_RADIUS: f32 = 10.0;
const DEFAULT_CATCH_RADIUS: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./level.ini";

/// Key names bound to each logical action. Names are matched
/// case-insensitively against what the host reports in
/// [`RawInput`](crate::resources::input::RawInput).
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    pub forward: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub interact: String,
    pub skip: String,
    pub cursor_release: String,
    pub cursor_capture: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".into(),
            back: "s".into(),
            left: "a".into(),
            right: "d".into(),
            interact: "e".into(),
            skip: "space".into(),
            cursor_release: "escape".into(),
            cursor_capture: "mouse0".into(),
        }
    }
}

impl KeyBindings {
    fn slots_mut(&mut self) -> [(&'static str, &mut String); 8] {
        [
            ("forward", &mut self.forward),
            ("back", &mut self.back),
            ("left", &mut self.left),
            ("right", &mut self.right),
            ("interact", &mut self.interact),
            ("skip", &mut self.skip),
            ("cursor_release", &mut self.cursor_release),
            ("cursor_capture", &mut self.cursor_capture),
        ]
    }
}

/// Level configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct LevelConfig {
    /// Completion tolerance for every sequencer.
    pub sequencer_epsilon: f32,
    pub door_open_distance: f32,
    pub door_speed: f32,
    /// Seconds an opened door waits before closing again; `None` stays open.
    pub door_auto_close: Option<f32>,
    pub min_line_duration: f32,
    pub seconds_per_char: f32,
    pub playback_rate: f32,
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
    pub chaser_speed: f32,
    pub chaser_detect_radius: f32,
    pub chaser_catch_radius: f32,
    pub keys: KeyBindings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            sequencer_epsilon: DEFAULT_EPSILON,
            door_open_distance: DEFAULT_DOOR_OPEN_DISTANCE,
            door_speed: DEFAULT_DOOR_SPEED,
            door_auto_close: None,
            min_line_duration: DEFAULT_MIN_LINE_DURATION,
            seconds_per_char: DEFAULT_SECONDS_PER_CHAR,
            playback_rate: DEFAULT_PLAYBACK_RATE,
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            chaser_speed: DEFAULT_CHASER_SPEED,
            chaser_detect_radius: DEFAULT_DETECT_RADIUS,
            chaser_catch_radius: DEFAULT_CATCH_RADIUS,
            keys: KeyBindings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn line_timing(&self) -> LineTiming {
        LineTiming {
            min_line_duration: self.min_line_duration,
            seconds_per_char: self.seconds_per_char,
            playback_rate: self.playback_rate,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Values that parse but make
    /// no sense (negative speeds, a zero epsilon) are rejected.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.load(&self.config_path).map_err(ConfigError::Ini)?;
        self.apply(&ini)?;
        info!(
            "Loaded level config from {:?}: door speed={}, open distance={}, move speed={}",
            self.config_path, self.door_speed, self.door_open_distance, self.move_speed
        );
        Ok(())
    }

    /// Parse configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(ConfigError::Ini)?;
        self.apply(&ini)
    }

    fn apply(&mut self, ini: &Ini) -> Result<(), ConfigError> {
        if let Some(v) = positive(ini, "sequencer", "epsilon")? {
            self.sequencer_epsilon = v;
        }

        if let Some(v) = non_negative(ini, "door", "open_distance")? {
            self.door_open_distance = v;
        }
        if let Some(v) = positive(ini, "door", "speed")? {
            self.door_speed = v;
        }
        if let Some(v) = non_negative(ini, "door", "auto_close")? {
            self.door_auto_close = (v > 0.0).then_some(v);
        }

        if let Some(v) = non_negative(ini, "dialogue", "min_line_duration")? {
            self.min_line_duration = v;
        }
        if let Some(v) = non_negative(ini, "dialogue", "seconds_per_char")? {
            self.seconds_per_char = v;
        }
        // Any playback rate is accepted; near-zero falls back to 1.0 at use.
        if let Some(v) = float(ini, "dialogue", "playback_rate")? {
            self.playback_rate = v;
        }

        if let Some(v) = positive(ini, "player", "move_speed")? {
            self.move_speed = v;
        }
        if let Some(v) = float(ini, "player", "mouse_sensitivity")? {
            self.mouse_sensitivity = v;
        }
        if let Some(v) = non_negative(ini, "player", "pitch_limit")? {
            self.pitch_limit = v.min(90.0);
        }

        if let Some(v) = positive(ini, "chaser", "speed")? {
            self.chaser_speed = v;
        }
        if let Some(v) = non_negative(ini, "chaser", "detect_radius")? {
            self.chaser_detect_radius = v;
        }
        if let Some(v) = non_negative(ini, "chaser", "catch_radius")? {
            self.chaser_catch_radius = v;
        }

        for (key, slot) in self.keys.slots_mut() {
            if let Some(name) = ini.get("keys", key) {
                let name = name.trim().to_lowercase();
                if !name.is_empty() {
                    *slot = name;
                }
            }
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut ini = Ini::new();

        ini.set("sequencer", "epsilon", Some(self.sequencer_epsilon.to_string()));

        ini.set("door", "open_distance", Some(self.door_open_distance.to_string()));
        ini.set("door", "speed", Some(self.door_speed.to_string()));
        ini.set(
            "door",
            "auto_close",
            Some(self.door_auto_close.unwrap_or(0.0).to_string()),
        );

        ini.set("dialogue", "min_line_duration", Some(self.min_line_duration.to_string()));
        ini.set("dialogue", "seconds_per_char", Some(self.seconds_per_char.to_string()));
        ini.set("dialogue", "playback_rate", Some(self.playback_rate.to_string()));

        ini.set("player", "move_speed", Some(self.move_speed.to_string()));
        ini.set("player", "mouse_sensitivity", Some(self.mouse_sensitivity.to_string()));
        ini.set("player", "pitch_limit", Some(self.pitch_limit.to_string()));

        ini.set("chaser", "speed", Some(self.chaser_speed.to_string()));
        ini.set("chaser", "detect_radius", Some(self.chaser_detect_radius.to_string()));
        ini.set("chaser", "catch_radius", Some(self.chaser_catch_radius.to_string()));

        let mut keys = self.keys.clone();
        for (key, slot) in keys.slots_mut() {
            ini.set("keys", key, Some(slot.clone()));
        }

        ini.write(&self.config_path)?;
        info!("Saved level config to {:?}", self.config_path);
        Ok(())
    }
}

fn float(ini: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    match ini.getfloat(section, key) {
        Ok(Some(v)) if v.is_finite() => Ok(Some(v as f32)),
        Ok(None) => Ok(None),
        _ => Err(invalid(ini, section, key)),
    }
}

fn positive(ini: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    match float(ini, section, key)? {
        Some(v) if v <= 0.0 => Err(invalid(ini, section, key)),
        other => Ok(other),
    }
}

fn non_negative(ini: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    match float(ini, section, key)? {
        Some(v) if v < 0.0 => Err(invalid(ini, section, key)),
        other => Ok(other),
    }
}

fn invalid(ini: &Ini, section: &str, key: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: ini.get(section, key).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LevelConfig::new();
        assert_eq!(config.sequencer_epsilon, DEFAULT_EPSILON);
        assert_eq!(config.door_auto_close, None);
        assert_eq!(config.keys.interact, "e");
        assert_eq!(config.config_path, PathBuf::from("./level.ini"));
    }

    #[test]
    fn test_partial_ini_keeps_other_defaults() {
        let mut config = LevelConfig::new();
        config
            .load_from_str("[door]\nspeed = 3.5\nauto_close = 2\n\n[keys]\ninteract = F\n")
            .unwrap();
        assert_eq!(config.door_speed, 3.5);
        assert_eq!(config.door_auto_close, Some(2.0));
        assert_eq!(config.door_open_distance, DEFAULT_DOOR_OPEN_DISTANCE);
        assert_eq!(config.keys.interact, "f");
        assert_eq!(config.keys.skip, "space");
    }

    #[test]
    fn test_zero_auto_close_means_stay_open() {
        let mut config = LevelConfig::new();
        config.load_from_str("[door]\nauto_close = 0\n").unwrap();
        assert_eq!(config.door_auto_close, None);
    }

    #[test]
    fn test_negative_speed_is_rejected() {
        let mut config = LevelConfig::new();
        let err = config.load_from_str("[door]\nspeed = -1\n").unwrap_err();
        match err {
            ConfigError::InvalidValue { section, key, value } => {
                assert_eq!(section, "door");
                assert_eq!(key, "speed");
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unparseable_number_is_rejected() {
        let mut config = LevelConfig::new();
        assert!(matches!(
            config.load_from_str("[player]\nmove_speed = fast\n"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = LevelConfig::with_path("/definitely/not/here/level.ini");
        assert!(matches!(config.load_from_file(), Err(ConfigError::Ini(_))));
        assert_eq!(config.door_speed, DEFAULT_DOOR_SPEED);
    }

    #[test]
    fn test_saved_file_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.ini");

        let mut config = LevelConfig::with_path(&path);
        config.door_speed = 2.25;
        config.door_auto_close = Some(3.0);
        config.keys.skip = "enter".into();
        config.save_to_file().unwrap();

        let mut loaded = LevelConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.door_speed, 2.25);
        assert_eq!(loaded.door_auto_close, Some(3.0));
        assert_eq!(loaded.keys.skip, "enter");
    }
}
