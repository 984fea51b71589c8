//! Emissive glow that fades in while the player is near.
//!
//! The host reads [`Glow::intensity`] to drive a material's emission.

use bevy_ecs::prelude::Component;

use crate::sequencer::{ActionSequencer, Step, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowAction {
    Brighten,
    Dim,
}

#[derive(Component, Clone, Debug)]
pub struct Glow {
    pub off: f32,
    pub on: f32,
    /// Intensity units per second.
    pub rate: f32,
    sequencer: ActionSequencer<GlowAction, f32>,
}

impl Glow {
    pub fn new(off: f32, on: f32, rate: f32) -> Self {
        Self {
            off,
            on,
            rate,
            sequencer: ActionSequencer::new([off]),
        }
    }

    pub fn intensity(&self) -> f32 {
        self.sequencer.params()[0]
    }

    pub fn is_lit(&self) -> bool {
        self.sequencer.is_complete() && self.sequencer.is_at(&[self.on])
    }

    pub fn brighten(&mut self) {
        self.sequencer
            .request(GlowAction::Brighten, [Step::move_to([self.on], self.rate)]);
    }

    pub fn dim(&mut self) {
        self.sequencer
            .request(GlowAction::Dim, [Step::move_to([self.off], self.rate)]);
    }

    pub fn tick(&mut self, dt: f32) -> TickOutcome<GlowAction> {
        self.sequencer.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_fades_in_and_back_out() {
        let mut glow = Glow::new(0.0, 1.0, 2.0);
        glow.brighten();
        glow.tick(0.25);
        assert!((glow.intensity() - 0.5).abs() < 1e-6);
        glow.dim();
        glow.tick(0.125);
        assert!((glow.intensity() - 0.25).abs() < 1e-6);
        glow.brighten();
        glow.tick(1.0);
        assert!(glow.is_lit());
    }
}
