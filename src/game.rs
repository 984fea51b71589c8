//! Level setup.
//!
//! Everything a host needs to stand up a level world: resources, observers,
//! the per-frame schedule, and a small demo level that exercises every
//! behavior. The headless binary also drives the demo with an [`Autopilot`]
//! that walks a fixed route by writing [`RawInput`] the way a keyboard would.

use std::collections::VecDeque;

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::components::chaser::Chaser;
use crate::components::dialogue::{DialogueLine, DialogueScript, DialogueSession};
use crate::components::door::DoorSetup;
use crate::components::glow::Glow;
use crate::components::group::Group;
use crate::components::hazard::Hazard;
use crate::components::lever::LeverSwitch;
use crate::components::mapposition::MapPosition;
use crate::components::player::{FirstPersonController, LookAngles};
use crate::components::portal::Portal;
use crate::components::pressureplate::PressurePlate;
use crate::components::triggerzone::TriggerZone;
use crate::events::audio::AudioCmd;
use crate::events::presentation::PresentationCmd;
use crate::resources::clips::ClipLibrary;
use crate::resources::cursor::CursorLock;
use crate::resources::input::{InputState, RawInput};
use crate::resources::levelconfig::LevelConfig;
use crate::resources::respawn::RespawnPoint;
use crate::resources::scene::SceneDirector;
use crate::resources::worldtime::WorldTime;
use crate::systems::chaser::chaser_system;
use crate::systems::cursor::cursor_lock_observer;
use crate::systems::dialogue::{dialogue_input_system, dialogue_tick_system};
use crate::systems::door::{door_init_system, door_request_observer, door_tick_system};
use crate::systems::glow::{glow_enter_observer, glow_exit_observer, glow_tick_system};
use crate::systems::hazard::{hazard_observer, respawn_observer};
use crate::systems::input::update_input_state;
use crate::systems::lever::lever_system;
use crate::systems::player::first_person_system;
use crate::systems::portal::portal_observer;
use crate::systems::presentation::update_presentation_messages;
use crate::systems::pressureplate::{plate_pressed_observer, plate_released_observer};
use crate::systems::zone::zone_detection_system;

pub const FIRST_SCENE: &str = "courtyard";
const ARRIVE_RADIUS: f32 = 0.25;

/// Insert every resource the level systems read.
pub fn insert_resources(world: &mut World, config: LevelConfig, clips: ClipLibrary) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(RawInput::default());
    world.insert_resource(InputState::from_bindings(&config.keys));
    world.insert_resource(CursorLock::default());
    world.insert_resource(SceneDirector::new(FIRST_SCENE));
    world.insert_resource(RespawnPoint::default());
    world.insert_resource(clips);
    world.insert_resource(config);
    world.init_resource::<Messages<PresentationCmd>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Register the observers. Call before the first schedule run.
pub fn register_observers(world: &mut World) {
    world.add_observer(door_request_observer);
    world.add_observer(plate_pressed_observer);
    world.add_observer(plate_released_observer);
    world.add_observer(glow_enter_observer);
    world.add_observer(glow_exit_observer);
    world.add_observer(portal_observer);
    world.add_observer(hazard_observer);
    world.add_observer(respawn_observer);
    world.add_observer(cursor_lock_observer);
    world.flush();
}

/// The per-frame schedule.
///
/// Movement runs before zone detection so zone events reflect this frame's
/// positions, controllers run after it, and doors tick last so a request made
/// this frame already moves the panels.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_presentation_messages,
            update_input_state,
            door_init_system,
            first_person_system,
            chaser_system,
            zone_detection_system,
            lever_system,
            dialogue_input_system,
            dialogue_tick_system,
            door_tick_system,
            glow_tick_system,
        )
            .chain(),
    );
    update
}

/// Handles to the demo level's interesting entities.
#[derive(Debug, Clone, Copy)]
pub struct DemoLevel {
    pub player: Entity,
    pub lever: Entity,
    pub gate: Entity,
    pub npc: Entity,
    pub plate: Entity,
    pub vault_door: Entity,
    pub water: Entity,
    pub chaser: Entity,
    pub portal: Entity,
}

/// Spawn the demo level: a lever-operated gate, a warden who talks, a
/// pressure plate holding a glowing vault door open, a pool of water, a
/// chaser guarding the far side, and a portal out.
pub fn spawn_demo_level(world: &mut World, script: DialogueScript) -> DemoLevel {
    let config = world
        .get_resource::<LevelConfig>()
        .cloned()
        .unwrap_or_default();

    let player = world
        .spawn((
            Group::new("player"),
            MapPosition::new(0.0, 0.0, 0.0),
            LookAngles::default(),
            FirstPersonController {
                move_speed: config.move_speed,
                mouse_sensitivity: config.mouse_sensitivity,
                pitch_limit: config.pitch_limit,
            },
        ))
        .id();

    let door_setup = |left, right| {
        let setup = DoorSetup::new(left, right)
            .with_slide(Vec3::X, config.door_open_distance, config.door_speed)
            .with_move_cue("door_slide");
        match config.door_auto_close {
            Some(delay) => setup.with_auto_close(delay),
            None => setup,
        }
    };

    let gate_left = world.spawn(MapPosition::new(-0.6, 0.0, -10.0)).id();
    let gate_right = world.spawn(MapPosition::new(0.6, 0.0, -10.0)).id();
    let gate = world
        .spawn((
            MapPosition::new(0.0, 0.0, -10.0),
            door_setup(Some(gate_left), Some(gate_right)),
        ))
        .id();

    let lever = world
        .spawn((
            MapPosition::new(2.0, 0.0, -3.0),
            TriggerZone::cube(1.5, "player"),
            LeverSwitch::new(gate),
        ))
        .id();

    let npc = world
        .spawn((
            MapPosition::new(-3.0, 0.0, -5.0),
            TriggerZone::cube(2.0, "player"),
            DialogueSession::new(script, config.line_timing()),
        ))
        .id();

    let vault_panel = world.spawn(MapPosition::new(0.0, 0.0, -18.0)).id();
    let vault_door = world
        .spawn((
            MapPosition::new(0.0, 0.0, -18.0),
            DoorSetup::new(None, Some(vault_panel))
                .with_slide(Vec3::X, config.door_open_distance, config.door_speed)
                .with_move_cue("vault_grind"),
            TriggerZone::new(Vec3::new(3.0, 2.0, 3.0), "player"),
            Glow::new(0.0, 4.0, 2.0),
        ))
        .id();

    let plate = world
        .spawn((
            MapPosition::new(0.0, 0.0, -14.0),
            TriggerZone::new(Vec3::new(1.0, 1.0, 1.0), "player"),
            PressurePlate::new(vault_door),
        ))
        .id();

    let water = world
        .spawn((
            MapPosition::new(6.0, -0.5, -14.0),
            TriggerZone::new(Vec3::new(2.0, 1.0, 2.0), "player"),
            Hazard,
        ))
        .id();

    let chaser_home = Vec3::new(14.0, 0.0, -30.0);
    let chaser = world
        .spawn((
            Group::new("enemy"),
            MapPosition::from(chaser_home),
            Chaser::new(
                chaser_home,
                config.chaser_speed,
                config.chaser_detect_radius,
                config.chaser_catch_radius,
            ),
        ))
        .id();

    let portal = world
        .spawn((
            MapPosition::new(0.0, 0.0, -24.0),
            TriggerZone::cube(1.0, "player"),
            Portal::new("catacombs"),
        ))
        .id();

    log::info!("Demo level spawned in scene '{}'", FIRST_SCENE);
    DemoLevel {
        player,
        lever,
        gate,
        npc,
        plate,
        vault_door,
        water,
        chaser,
        portal,
    }
}

/// The warden's lines when no dialogue file is given.
pub fn default_script() -> DialogueScript {
    DialogueScript {
        speaker: "Warden".to_string(),
        lines: vec![
            DialogueLine::new("The vault only stays open while someone stands on the plate.")
                .with_clip("warden_01"),
            DialogueLine::new("Keep clear of the water to the east."),
            DialogueLine::new("Off you go.").with_clip("warden_03"),
        ],
        finish_trigger: Some("wave".to_string()),
        disable_after: true,
    }
}

/// Clip lengths for the default script and the door cues.
pub fn default_clips() -> ClipLibrary {
    ClipLibrary::new()
        .with_clip("warden_01", 2.0)
        .with_clip("warden_03", 1.5)
        .with_clip("door_slide", 0.8)
        .with_clip("vault_grind", 1.2)
}

#[derive(Debug, Clone, PartialEq)]
pub enum AutopilotStep {
    /// Face the point and hold forward until there.
    WalkTo(Vec3),
    /// Tap a key for one frame.
    Press(String),
    Wait(f32),
}

/// Scripted stand-in for a player at the keyboard.
#[derive(Resource, Debug, Clone)]
pub struct Autopilot {
    player: Entity,
    steps: VecDeque<AutopilotStep>,
    waited: f32,
    held: Option<String>,
}

impl Autopilot {
    pub fn new(player: Entity, steps: impl IntoIterator<Item = AutopilotStep>) -> Self {
        Self {
            player,
            steps: steps.into_iter().collect(),
            waited: 0.0,
            held: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.steps.is_empty() && self.held.is_none()
    }

    /// Route through every behavior of the demo level.
    pub fn demo_route(level: &DemoLevel, keys: &InputState) -> Self {
        use AutopilotStep::*;
        let interact = keys.interact.key_binding.clone();
        let skip = keys.skip.key_binding.clone();
        Self::new(
            level.player,
            [
                WalkTo(Vec3::new(2.0, 0.0, -3.0)),
                Press(interact.clone()),
                Wait(1.0),
                WalkTo(Vec3::new(-3.0, 0.0, -5.0)),
                Press(interact),
                Wait(0.5),
                Press(skip),
                Wait(4.0),
                WalkTo(Vec3::new(0.0, 0.0, -8.0)),
                WalkTo(Vec3::new(0.0, 0.0, -14.0)),
                Wait(1.5),
                WalkTo(Vec3::new(0.0, 0.0, -24.0)),
            ],
        )
    }
}

/// Feed the next autopilot step into [`RawInput`]. Runs before
/// [`update_input_state`].
pub fn autopilot_system(
    mut pilot: ResMut<Autopilot>,
    mut raw: ResMut<RawInput>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut players: Query<(&MapPosition, &mut LookAngles)>,
) {
    if let Some(key) = pilot.held.take() {
        raw.release(&key);
    }
    let Some(step) = pilot.steps.front().cloned() else {
        return;
    };
    let Ok((position, mut look)) = players.get_mut(pilot.player) else {
        return;
    };
    let forward = &input.forward.key_binding;
    match step {
        AutopilotStep::WalkTo(target) => {
            let mut to = target - position.pos;
            to.y = 0.0;
            if to.length() <= ARRIVE_RADIUS {
                raw.release(forward);
                pilot.steps.pop_front();
            } else {
                look.yaw = LookAngles::yaw_towards(to);
                raw.press(forward);
            }
        }
        AutopilotStep::Press(key) => {
            raw.press(&key);
            pilot.held = Some(key);
            pilot.steps.pop_front();
        }
        AutopilotStep::Wait(seconds) => {
            pilot.waited += time.delta;
            if pilot.waited >= seconds {
                pilot.waited = 0.0;
                pilot.steps.pop_front();
            }
        }
    }
}
