//! Scene requests.
//!
//! Loading scenes and quitting are the host's job. Behaviors only record
//! what they want in the [`SceneDirector`]; the host polls it after each
//! frame.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Default)]
pub struct SceneDirector {
    current: String,
    pending: Option<String>,
    quit: bool,
}

impl SceneDirector {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            pending: None,
            quit: false,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Ask for `scene`. A later request in the same frame wins.
    pub fn request_scene(&mut self, scene: impl Into<String>) {
        self.pending = Some(scene.into());
    }

    /// Hand the pending request to the host, making it the current scene.
    pub fn take_pending(&mut self) -> Option<String> {
        let next = self.pending.take()?;
        self.current = next.clone();
        Some(next)
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_pending_switches_current() {
        let mut director = SceneDirector::new("hall");
        assert_eq!(director.take_pending(), None);
        director.request_scene("crypt");
        director.request_scene("tower");
        assert_eq!(director.pending(), Some("tower"));
        assert_eq!(director.take_pending().as_deref(), Some("tower"));
        assert_eq!(director.current(), "tower");
        assert_eq!(director.pending(), None);
    }
}
