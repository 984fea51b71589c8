//! ECS side of the presentation seam.
//!
//! [`Presenter`] bundles the message writers and the clip library so any
//! system or observer can hand a behavior a [`PresentationSink`] addressed to
//! one entity. The host drains [`PresentationCmd`] and [`AudioCmd`] after
//! each frame.
//!
//! Bevy ECS' [`Messages`] API requires calling `update()` once per frame;
//! [`update_presentation_messages`] does that for both queues and runs first
//! in the schedule.
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::debug;

use crate::events::audio::AudioCmd;
use crate::events::presentation::PresentationCmd;
use crate::presentation::PresentationSink;
use crate::resources::clips::ClipLibrary;

#[derive(SystemParam)]
pub struct Presenter<'w> {
    pub text: MessageWriter<'w, PresentationCmd>,
    pub audio: MessageWriter<'w, AudioCmd>,
    pub clips: Res<'w, ClipLibrary>,
}

impl<'w> Presenter<'w> {
    pub fn for_entity(&mut self, entity: Entity) -> EntityPresenter<'_, 'w> {
        EntityPresenter {
            presenter: self,
            entity,
        }
    }
}

/// A [`PresentationSink`] whose output is attributed to one entity.
pub struct EntityPresenter<'a, 'w> {
    presenter: &'a mut Presenter<'w>,
    entity: Entity,
}

impl PresentationSink for EntityPresenter<'_, '_> {
    fn show_text(&mut self, text: &str) {
        self.presenter.text.write(PresentationCmd::ShowText {
            speaker: self.entity,
            text: text.to_string(),
        });
    }

    fn clear_text(&mut self) {
        self.presenter.text.write(PresentationCmd::ClearText {
            speaker: self.entity,
        });
    }

    fn play_clip(&mut self, clip: &str, looped: bool) {
        self.presenter.audio.write(AudioCmd::PlayClip {
            emitter: self.entity,
            clip: clip.to_string(),
            looped,
        });
    }

    fn stop_clip(&mut self, clip: &str) {
        self.presenter.audio.write(AudioCmd::StopClip {
            emitter: self.entity,
            clip: clip.to_string(),
        });
    }

    fn clip_length(&self, clip: &str) -> Option<f32> {
        self.presenter.clips.length(clip)
    }

    fn fire_trigger(&mut self, trigger: &str) {
        self.presenter.text.write(PresentationCmd::FireTrigger {
            target: self.entity,
            trigger: trigger.to_string(),
        });
    }
}

/// Advance both presentation queues so messages written this frame stay
/// readable until the end of the next one.
pub fn update_presentation_messages(
    mut text: ResMut<Messages<PresentationCmd>>,
    mut audio: ResMut<Messages<AudioCmd>>,
) {
    text.update();
    audio.update();
}

/// Log every presentation and audio command. The headless host uses this in
/// place of a renderer and an audio device.
pub fn log_presentation_messages(
    mut text: MessageReader<PresentationCmd>,
    mut audio: MessageReader<AudioCmd>,
) {
    for cmd in text.read() {
        match cmd {
            PresentationCmd::ShowText { speaker, text } => {
                log::info!("[{:?}] \"{}\"", speaker, text)
            }
            PresentationCmd::ClearText { speaker } => debug!("[{:?}] text cleared", speaker),
            PresentationCmd::FireTrigger { target, trigger } => {
                debug!("[{:?}] trigger {}", target, trigger)
            }
        }
    }
    for cmd in audio.read() {
        match cmd {
            AudioCmd::PlayClip {
                emitter,
                clip,
                looped,
            } => debug!("[{:?}] play {} (looped: {})", emitter, clip, looped),
            AudioCmd::StopClip { emitter, clip } => debug!("[{:?}] stop {}", emitter, clip),
        }
    }
}
