//! Presentation seam.
//!
//! Behaviors never render text or play sound themselves. They talk to a
//! [`PresentationSink`], which the ECS side implements by writing
//! [`PresentationCmd`](crate::events::presentation::PresentationCmd) and
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages (see
//! [`crate::systems::presentation`]). Every call is addressed to the entity
//! the sink was created for.

/// Output side of a behavior: text, audio, and animation triggers.
pub trait PresentationSink {
    fn show_text(&mut self, text: &str);
    fn clear_text(&mut self);
    fn play_clip(&mut self, clip: &str, looped: bool);
    fn stop_clip(&mut self, clip: &str);
    /// Length of a clip in seconds, if the clip is known.
    fn clip_length(&self, clip: &str) -> Option<f32>;
    fn fire_trigger(&mut self, trigger: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PresentationSink;
    use rustc_hash::FxHashMap;

    /// Sink that records every call as a short string.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub calls: Vec<String>,
        pub clips: FxHashMap<String, f32>,
        pub text: Option<String>,
        pub playing: Vec<String>,
    }

    impl RecordingSink {
        pub fn with_clip(mut self, clip: &str, length: f32) -> Self {
            self.clips.insert(clip.to_string(), length);
            self
        }

        pub fn count(&self, prefix: &str) -> usize {
            self.calls.iter().filter(|c| c.starts_with(prefix)).count()
        }
    }

    impl PresentationSink for RecordingSink {
        fn show_text(&mut self, text: &str) {
            self.calls.push(format!("show:{text}"));
            self.text = Some(text.to_string());
        }
        fn clear_text(&mut self) {
            self.calls.push("clear".to_string());
            self.text = None;
        }
        fn play_clip(&mut self, clip: &str, looped: bool) {
            self.calls.push(format!("play:{clip}:{looped}"));
            self.playing.push(clip.to_string());
        }
        fn stop_clip(&mut self, clip: &str) {
            self.calls.push(format!("stop:{clip}"));
            self.playing.retain(|c| c != clip);
        }
        fn clip_length(&self, clip: &str) -> Option<f32> {
            self.clips.get(clip).copied()
        }
        fn fire_trigger(&mut self, trigger: &str) {
            self.calls.push(format!("trigger:{trigger}"));
        }
    }
}
