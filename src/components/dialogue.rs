//! NPC dialogue sessions.
//!
//! A [`DialogueSession`] plays a [`DialogueScript`] one line at a time. Each
//! line shows its text, starts its clip if it has one, and then waits for the
//! line's duration on an [`ActionSequencer`]. A skip cancels the wait and
//! moves on immediately. After the last line the session fires its terminal
//! hook once (an animation trigger on the speaker and, optionally, disabling
//! further interaction) and ends.
//!
//! # Line duration
//!
//! - With a clip of known length: `length / rate`, where a playback rate of
//!   (almost) zero counts as 1.0
//! - Otherwise: `max(min_line_duration, chars * seconds_per_char)`
//!
//! Scripts are plain JSON:
//!
//! ```json
//! {
//!   "speaker": "Keeper",
//!   "lines": [
//!     { "text": "You made it.", "clip": "keeper_greeting" },
//!     { "text": "The gate is just ahead." }
//!   ],
//!   "finish_trigger": "wave",
//!   "disable_after": true
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::presentation::PresentationSink;
use crate::sequencer::{ActionSequencer, Step, TickOutcome};

/// Playback rates closer to zero than this count as 1.0.
const MIN_PLAYBACK_RATE: f32 = 1e-3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub text: String,
    #[serde(default)]
    pub clip: Option<String>,
}

impl DialogueLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            clip: None,
        }
    }

    pub fn with_clip(mut self, clip: impl Into<String>) -> Self {
        self.clip = Some(clip.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueScript {
    pub speaker: String,
    #[serde(default)]
    pub lines: Vec<DialogueLine>,
    /// Animation trigger fired on the speaker when the last line ends.
    #[serde(default)]
    pub finish_trigger: Option<String>,
    /// Refuse new sessions once one has finished.
    #[serde(default)]
    pub disable_after: bool,
}

impl DialogueScript {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Fallback timing for lines without a usable clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTiming {
    pub min_line_duration: f32,
    pub seconds_per_char: f32,
    /// Audio playback rate (pitch). Scales clip-driven durations.
    pub playback_rate: f32,
}

impl Default for LineTiming {
    fn default() -> Self {
        Self {
            min_line_duration: 1.5,
            seconds_per_char: 0.05,
            playback_rate: 1.0,
        }
    }
}

impl LineTiming {
    pub fn effective_rate(&self) -> f32 {
        let rate = self.playback_rate.abs();
        if rate < MIN_PLAYBACK_RATE || !rate.is_finite() {
            1.0
        } else {
            rate
        }
    }

    /// How long `line` stays up, given the clip lengths known to the sink.
    pub fn duration(&self, line: &DialogueLine, sink: &impl PresentationSink) -> f32 {
        let clip_length = line.clip.as_deref().and_then(|c| sink.clip_length(c));
        match clip_length {
            Some(length) => length / self.effective_rate(),
            None => {
                let chars = line.text.chars().count() as f32;
                self.min_line_duration.max(chars * self.seconds_per_char)
            }
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct DialogueSession {
    script: DialogueScript,
    timing: LineTiming,
    sequencer: ActionSequencer<usize, f32>,
    index: usize,
    playing: bool,
    hook_fired: bool,
    interaction_enabled: bool,
    current_clip: Option<String>,
}

impl DialogueSession {
    pub fn new(script: DialogueScript, timing: LineTiming) -> Self {
        Self {
            script,
            timing,
            sequencer: ActionSequencer::new([]),
            index: 0,
            playing: false,
            hook_fired: false,
            interaction_enabled: true,
            current_clip: None,
        }
    }

    pub fn script(&self) -> &DialogueScript {
        &self.script
    }

    /// Index of the line on screen; 0 outside a session.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Clip of the current line that has not been stopped yet.
    pub fn current_clip(&self) -> Option<&str> {
        self.current_clip.as_deref()
    }

    /// Begin a session at the first line.
    ///
    /// Returns false when a session is already running or interaction is
    /// disabled. An empty script ends at once: nothing is shown and the
    /// terminal hook does not fire.
    pub fn start(&mut self, sink: &mut impl PresentationSink) -> bool {
        if self.playing || !self.interaction_enabled {
            return false;
        }
        if self.script.lines.is_empty() {
            log::debug!("Dialogue for {} has no lines", self.script.speaker);
            return true;
        }
        log::debug!("Dialogue with {} started", self.script.speaker);
        self.playing = true;
        self.hook_fired = false;
        self.index = 0;
        self.play_line(sink);
        true
    }

    /// Cut the current line short and move to the next one.
    pub fn skip(&mut self, sink: &mut impl PresentationSink) {
        if !self.playing {
            return;
        }
        if let TickOutcome::Finished(_) = self.sequencer.skip_step() {
            self.advance(sink);
        }
    }

    pub fn tick(&mut self, dt: f32, sink: &mut impl PresentationSink) {
        if !self.playing {
            return;
        }
        if let TickOutcome::Finished(_) = self.sequencer.tick(dt) {
            self.advance(sink);
        }
    }

    /// Show lines from the current index on, passing over any that end as
    /// soon as they start, until one needs time or the script runs out.
    fn play_line(&mut self, sink: &mut impl PresentationSink) {
        loop {
            self.stop_clip(sink);
            let line = &self.script.lines[self.index];
            sink.show_text(&line.text);
            if let Some(clip) = &line.clip {
                sink.play_clip(clip, false);
                self.current_clip = Some(clip.clone());
            }
            let duration = self.timing.duration(line, &*sink);
            self.sequencer.request(self.index, [Step::wait(duration)]);
            if self.sequencer.is_running() {
                return;
            }
            if self.index + 1 >= self.script.lines.len() {
                self.finish(sink);
                return;
            }
            self.index += 1;
        }
    }

    fn advance(&mut self, sink: &mut impl PresentationSink) {
        if self.index + 1 < self.script.lines.len() {
            self.index += 1;
            self.play_line(sink);
        } else {
            self.finish(sink);
        }
    }

    fn finish(&mut self, sink: &mut impl PresentationSink) {
        self.stop_clip(sink);
        sink.clear_text();
        if !self.hook_fired {
            self.hook_fired = true;
            if let Some(trigger) = &self.script.finish_trigger {
                sink.fire_trigger(trigger);
            }
            if self.script.disable_after {
                self.interaction_enabled = false;
            }
        }
        log::debug!("Dialogue with {} finished", self.script.speaker);
        self.sequencer.cancel();
        self.index = 0;
        self.playing = false;
    }

    fn stop_clip(&mut self, sink: &mut impl PresentationSink) {
        if let Some(clip) = self.current_clip.take() {
            sink.stop_clip(&clip);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::testing::RecordingSink;

    fn script(lines: Vec<DialogueLine>) -> DialogueScript {
        DialogueScript {
            speaker: "Keeper".into(),
            lines,
            finish_trigger: Some("wave".into()),
            disable_after: false,
        }
    }

    fn three_lines() -> (DialogueSession, RecordingSink) {
        let session = DialogueSession::new(
            script(vec![
                DialogueLine::new("first").with_clip("a"),
                DialogueLine::new("second"),
                DialogueLine::new("third").with_clip("c"),
            ]),
            LineTiming::default(),
        );
        let sink = RecordingSink::default().with_clip("a", 2.0).with_clip("c", 1.5);
        (session, sink)
    }

    #[test]
    fn test_duration_uses_clip_length_over_rate() {
        let sink = RecordingSink::default().with_clip("a", 2.0);
        let line = DialogueLine::new("hi").with_clip("a");
        let timing = LineTiming {
            playback_rate: 2.0,
            ..LineTiming::default()
        };
        assert!((timing.duration(&line, &sink) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_playback_rate_counts_as_one() {
        let sink = RecordingSink::default().with_clip("a", 2.0);
        let line = DialogueLine::new("hi").with_clip("a");
        let timing = LineTiming {
            playback_rate: 0.0,
            ..LineTiming::default()
        };
        assert!((timing.duration(&line, &sink) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_duration_without_clip_uses_text_length_with_floor() {
        let sink = RecordingSink::default();
        let timing = LineTiming {
            min_line_duration: 1.0,
            seconds_per_char: 0.1,
            playback_rate: 1.0,
        };
        assert!((timing.duration(&DialogueLine::new("abc"), &sink) - 1.0).abs() < 1e-6);
        let long = DialogueLine::new("a".repeat(25));
        assert!((timing.duration(&long, &sink) - 2.5).abs() < 1e-5);
        // Unknown clip falls back to text timing.
        let unknown = DialogueLine::new("abc").with_clip("missing");
        assert!((timing.duration(&unknown, &sink) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lines_advance_on_timeout() {
        let (mut session, mut sink) = three_lines();
        assert!(session.start(&mut sink));
        assert_eq!(sink.text.as_deref(), Some("first"));
        assert_eq!(session.current_clip(), Some("a"));

        session.tick(1.5, &mut sink);
        assert_eq!(session.index(), 0);
        session.tick(0.5, &mut sink);
        assert_eq!(session.index(), 1);
        assert_eq!(sink.text.as_deref(), Some("second"));
        assert_eq!(session.current_clip(), None);
    }

    #[test]
    fn test_skip_shows_next_line_without_audio_pending() {
        let (mut session, mut sink) = three_lines();
        session.start(&mut sink);
        session.skip(&mut sink);

        assert_eq!(session.index(), 1);
        assert_eq!(sink.text.as_deref(), Some("second"));
        assert_eq!(session.current_clip(), None);
        assert!(sink.playing.is_empty());
        assert_eq!(sink.calls, vec!["show:first", "play:a:false", "stop:a", "show:second"]);
    }

    #[test]
    fn test_terminal_hook_fires_once_per_session() {
        let (mut session, mut sink) = three_lines();
        session.start(&mut sink);
        session.skip(&mut sink);
        session.skip(&mut sink);
        assert_eq!(sink.count("trigger:"), 0, "never on intermediate lines");
        session.skip(&mut sink);
        assert_eq!(sink.count("trigger:"), 1);
        assert!(!session.is_playing());
        assert_eq!(session.index(), 0);
        assert_eq!(sink.text, None);

        for _ in 0..5 {
            session.skip(&mut sink);
            session.tick(10.0, &mut sink);
        }
        assert_eq!(sink.count("trigger:"), 1);
    }

    #[test]
    fn test_terminal_hook_fires_on_timeout_too() {
        let (mut session, mut sink) = three_lines();
        session.start(&mut sink);
        for _ in 0..10 {
            session.tick(1.0, &mut sink);
        }
        assert_eq!(sink.count("trigger:wave"), 1);
        assert!(!session.is_playing());
        assert!(sink.playing.is_empty());
    }

    #[test]
    fn test_new_session_fires_hook_again() {
        let (mut session, mut sink) = three_lines();
        for _ in 0..2 {
            assert!(session.start(&mut sink));
            for _ in 0..3 {
                session.skip(&mut sink);
            }
        }
        assert_eq!(sink.count("trigger:"), 2);
    }

    #[test]
    fn test_disable_after_blocks_new_sessions() {
        let mut s = script(vec![DialogueLine::new("only")]);
        s.disable_after = true;
        let mut session = DialogueSession::new(s, LineTiming::default());
        let mut sink = RecordingSink::default();
        assert!(session.start(&mut sink));
        session.skip(&mut sink);
        assert!(!session.interaction_enabled());
        assert!(!session.start(&mut sink));
        assert_eq!(sink.count("show:"), 1);
    }

    #[test]
    fn test_start_while_playing_is_ignored() {
        let (mut session, mut sink) = three_lines();
        assert!(session.start(&mut sink));
        session.skip(&mut sink);
        assert!(!session.start(&mut sink));
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_index_never_decreases_within_session() {
        let (mut session, mut sink) = three_lines();
        session.start(&mut sink);
        let mut last = 0;
        for _ in 0..30 {
            session.tick(0.2, &mut sink);
            if !session.is_playing() {
                break;
            }
            assert!(session.index() >= last);
            last = session.index();
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn test_empty_script_ends_immediately() {
        let mut session = DialogueSession::new(script(Vec::new()), LineTiming::default());
        let mut sink = RecordingSink::default();
        assert!(session.start(&mut sink));
        assert!(!session.is_playing());
        assert!(sink.calls.is_empty());
        session.tick(1.0, &mut sink);
        session.skip(&mut sink);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn test_zero_duration_lines_run_through() {
        let timing = LineTiming {
            min_line_duration: 0.0,
            seconds_per_char: 0.0,
            playback_rate: 1.0,
        };
        let mut session = DialogueSession::new(
            script(vec![DialogueLine::new("a"), DialogueLine::new("b")]),
            timing,
        );
        let mut sink = RecordingSink::default();
        session.start(&mut sink);
        assert!(!session.is_playing());
        assert_eq!(sink.count("show:"), 2);
        assert_eq!(sink.count("trigger:wave"), 1);
    }

    #[test]
    fn test_long_run_of_instant_lines_finishes() {
        let timing = LineTiming {
            min_line_duration: 0.0,
            seconds_per_char: 0.0,
            playback_rate: 1.0,
        };
        let lines = vec![DialogueLine::new(""); 50_000];
        let mut session = DialogueSession::new(script(lines), timing);
        let mut sink = RecordingSink::default();
        assert!(session.start(&mut sink));
        assert!(!session.is_playing());
        assert_eq!(sink.count("show:"), 50_000);
        assert_eq!(sink.count("trigger:wave"), 1);
    }

    #[test]
    fn test_script_from_json() {
        let json = r#"{
            "speaker": "Keeper",
            "lines": [
                { "text": "You made it.", "clip": "keeper_greeting" },
                { "text": "Go on." }
            ],
            "finish_trigger": "wave"
        }"#;
        let script = DialogueScript::from_json_str(json).unwrap();
        assert_eq!(script.lines.len(), 2);
        assert_eq!(script.lines[0].clip.as_deref(), Some("keeper_greeting"));
        assert_eq!(script.lines[1].clip, None);
        assert!(!script.disable_after);
    }

    #[test]
    fn test_script_from_bad_json_is_an_error() {
        let err = DialogueScript::from_json_str("{ \"lines\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
