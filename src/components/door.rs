//! Sliding-panel doors.
//!
//! A door is authored as a [`DoorSetup`] pointing at one or two panel
//! entities. [`door_init_system`](crate::systems::door::door_init_system)
//! reads each panel's rest position once and replaces the setup's role with a
//! [`Door`], or marks the entity [`Disabled`](super::disabled::Disabled) when
//! the setup is unusable.
//!
//! Motion runs on an [`ActionSequencer`] over the panel positions, so a door
//! can be reversed at any point and picks up from wherever its panels are.
//!
//! # Panel layout
//!
//! - Right panel (or the only panel): opens toward `+slide_axis`
//! - Left panel: opens toward `-slide_axis`

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::presentation::PresentationSink;
use crate::sequencer::{ActionSequencer, Params, Step, TickOutcome};

/// What a controller can ask of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorAction {
    Open,
    Close,
    /// Resolves to `Close` when open or opening, `Open` otherwise.
    Toggle,
}

/// Logical door state derived from the panel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Authoring data for a door, turned into a [`Door`] on the first frame.
#[derive(Component, Clone, Debug)]
pub struct DoorSetup {
    pub left_panel: Option<Entity>,
    pub right_panel: Option<Entity>,
    /// Direction the right panel slides to open. Normalized on init.
    pub slide_axis: Vec3,
    pub open_distance: f32,
    /// Panel speed in units per second.
    pub speed: f32,
    /// Looping clip played while the panels move.
    pub move_cue: Option<String>,
    /// Close again this many seconds after reaching open.
    pub auto_close_after: Option<f32>,
}

impl DoorSetup {
    pub fn new(left_panel: Option<Entity>, right_panel: Option<Entity>) -> Self {
        Self {
            left_panel,
            right_panel,
            slide_axis: Vec3::X,
            open_distance: 1.0,
            speed: 1.0,
            move_cue: None,
            auto_close_after: None,
        }
    }

    pub fn with_slide(mut self, axis: Vec3, open_distance: f32, speed: f32) -> Self {
        self.slide_axis = axis;
        self.open_distance = open_distance;
        self.speed = speed;
        self
    }

    pub fn with_move_cue(mut self, cue: impl Into<String>) -> Self {
        self.move_cue = Some(cue.into());
        self
    }

    pub fn with_auto_close(mut self, delay: f32) -> Self {
        self.auto_close_after = Some(delay);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorPanel {
    pub entity: Entity,
    pub closed: Vec3,
    pub open: Vec3,
}

/// What a request did to the door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DoorRequestOutcome {
    /// `Open` or `Close`; never `Toggle`.
    pub resolved: DoorAction,
    pub preempted: Option<DoorAction>,
    /// False when the panels were already at the requested position.
    pub started: bool,
}

#[derive(Component, Clone, Debug)]
pub struct Door {
    pub panels: SmallVec<[DoorPanel; 2]>,
    pub speed: f32,
    pub move_cue: Option<String>,
    pub auto_close_after: Option<f32>,
    sequencer: ActionSequencer<DoorAction, Vec3>,
    cue_playing: bool,
    reported: DoorState,
}

impl Door {
    /// Build a door from its setup. `rest_position` looks up a panel's
    /// current position.
    pub fn from_setup(
        setup: &DoorSetup,
        rest_position: impl Fn(Entity) -> Option<Vec3>,
        epsilon: f32,
    ) -> Result<Self, ConfigError> {
        if setup.left_panel.is_none() && setup.right_panel.is_none() {
            return Err(ConfigError::NoPanels);
        }
        let axis = setup.slide_axis.normalize_or_zero();
        let offset = axis * setup.open_distance;
        let mut panels: SmallVec<[DoorPanel; 2]> = SmallVec::new();
        for (entity, sign) in [(setup.left_panel, -1.0), (setup.right_panel, 1.0)] {
            let Some(entity) = entity else { continue };
            let closed = rest_position(entity).ok_or(ConfigError::MissingPanelPosition(entity))?;
            panels.push(DoorPanel {
                entity,
                closed,
                open: closed + offset * sign,
            });
        }
        let sequencer =
            ActionSequencer::new(panels.iter().map(|p| p.closed)).with_epsilon(epsilon);
        Ok(Self {
            panels,
            speed: setup.speed,
            move_cue: setup.move_cue.clone(),
            auto_close_after: setup.auto_close_after,
            sequencer,
            cue_playing: false,
            reported: DoorState::Closed,
        })
    }

    pub fn open_targets(&self) -> Params<Vec3> {
        self.panels.iter().map(|p| p.open).collect()
    }

    pub fn closed_targets(&self) -> Params<Vec3> {
        self.panels.iter().map(|p| p.closed).collect()
    }

    /// Current panel positions, in panel order.
    pub fn panel_positions(&self) -> &[Vec3] {
        self.sequencer.params()
    }

    pub fn is_complete(&self) -> bool {
        self.sequencer.is_complete()
    }

    pub fn is_moving(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn cue_playing(&self) -> bool {
        self.cue_playing
    }

    /// `Open` and `Closed` only once the panels sit on the target of the
    /// current move; anything short of that reports the heading.
    pub fn state(&self) -> DoorState {
        if self.sequencer.is_running() && !self.sequencer.is_at(self.sequencer.targets()) {
            return if self.heading_open() {
                DoorState::Opening
            } else {
                DoorState::Closing
            };
        }
        if self.sequencer.is_at(&self.open_targets()) {
            DoorState::Open
        } else if self.sequencer.is_at(&self.closed_targets()) {
            DoorState::Closed
        } else if self.heading_open() {
            DoorState::Opening
        } else {
            DoorState::Closing
        }
    }

    fn heading_open(&self) -> bool {
        let eps = self.sequencer.epsilon();
        self.sequencer
            .targets()
            .iter()
            .zip(self.panels.iter())
            .all(|(t, p)| t.distance(p.open) <= eps)
    }

    pub fn resolve(&self, action: DoorAction) -> DoorAction {
        match action {
            DoorAction::Toggle => match self.state() {
                DoorState::Open | DoorState::Opening => DoorAction::Close,
                DoorState::Closed | DoorState::Closing => DoorAction::Open,
            },
            other => other,
        }
    }

    /// Start `action`, preempting whatever the door was doing.
    ///
    /// The cue of a preempted motion is stopped before the new motion's cue
    /// starts.
    pub fn request(
        &mut self,
        action: DoorAction,
        sink: &mut impl PresentationSink,
    ) -> DoorRequestOutcome {
        let resolved = self.resolve(action);
        let mut steps: Vec<Step<Vec3>> = Vec::with_capacity(3);
        match resolved {
            DoorAction::Open => {
                steps.push(Step::move_to(self.open_targets(), self.speed));
                if let Some(delay) = self.auto_close_after {
                    steps.push(Step::wait(delay));
                    steps.push(Step::move_to(self.closed_targets(), self.speed));
                }
            }
            _ => steps.push(Step::move_to(self.closed_targets(), self.speed)),
        }

        let preempted = self.sequencer.request(resolved, steps);
        self.stop_cue(sink);
        let started = self.sequencer.is_running();
        if started {
            if let Some(cue) = &self.move_cue {
                sink.play_clip(cue, true);
                self.cue_playing = true;
            }
        }
        DoorRequestOutcome {
            resolved,
            preempted,
            started,
        }
    }

    pub fn tick(&mut self, dt: f32, sink: &mut impl PresentationSink) -> TickOutcome<DoorAction> {
        let outcome = self.sequencer.tick(dt);
        if matches!(outcome, TickOutcome::Finished(_)) {
            self.stop_cue(sink);
        }
        outcome
    }

    /// Returns `(from, to)` when the logical state changed since the last call.
    pub fn refresh_state(&mut self) -> Option<(DoorState, DoorState)> {
        let now = self.state();
        if now == self.reported {
            return None;
        }
        let from = std::mem::replace(&mut self.reported, now);
        Some((from, now))
    }

    fn stop_cue(&mut self, sink: &mut impl PresentationSink) {
        if !self.cue_playing {
            return;
        }
        if let Some(cue) = &self.move_cue {
            sink.stop_clip(cue);
        }
        self.cue_playing = false;
    }
}
