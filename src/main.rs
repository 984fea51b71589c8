//! Stagehand headless demo host.
//!
//! Plays the role of a game engine for the level behaviors:
//! - **bevy_ecs** world and schedule for the level
//! - an autopilot writes raw input the way a keyboard would
//! - presentation and audio commands are logged instead of rendered
//!
//! # Main Loop
//!
//! 1. Load the level config (INI), dialogue script and clip library (JSON)
//! 2. Insert resources, register observers, spawn the demo level
//! 3. Each frame: advance time, run the schedule, poll the scene director
//! 4. Stop on a scene request, a quit request, the end of the route, or the
//!    frame limit
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 2400
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use stagehand::components::dialogue::DialogueScript;
use stagehand::components::door::Door;
use stagehand::game::{self, Autopilot, autopilot_system};
use stagehand::resources::clips::ClipLibrary;
use stagehand::resources::input::InputState;
use stagehand::resources::levelconfig::LevelConfig;
use stagehand::resources::scene::SceneDirector;
use stagehand::resources::worldtime::WorldTime;
use stagehand::systems::glow::glow_tick_system;
use stagehand::systems::input::update_input_state;
use stagehand::systems::presentation::log_presentation_messages;
use stagehand::systems::time::update_world_time;

/// Stagehand level behavior runtime
#[derive(Parser)]
#[command(version, about = "Runs the stagehand demo level headless with a scripted player.")]
struct Cli {
    /// Level configuration file.
    #[arg(long, value_name = "PATH", default_value = "level.ini")]
    config: PathBuf,

    /// Dialogue script (JSON) for the warden.
    #[arg(long, value_name = "PATH")]
    dialogue: Option<PathBuf>,

    /// Clip library (JSON map of clip name to seconds).
    #[arg(long, value_name = "PATH")]
    clips: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Write the default configuration to `--config` and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.write_default_config {
        let config = LevelConfig::with_path(&cli.config);
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", cli.config.display());
        return;
    }

    let mut config = LevelConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("Using default level config ({})", e);
        config = LevelConfig::with_path(&cli.config);
    }

    let script = match &cli.dialogue {
        Some(path) => DialogueScript::load(path).unwrap_or_else(|e| {
            warn!("Failed to load dialogue {}: {}", path.display(), e);
            game::default_script()
        }),
        None => game::default_script(),
    };

    let clips = match &cli.clips {
        Some(path) => ClipLibrary::load(path).unwrap_or_else(|e| {
            warn!("Failed to load clips {}: {}", path.display(), e);
            game::default_clips()
        }),
        None => game::default_clips(),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::insert_resources(&mut world, config, clips);
    game::register_observers(&mut world);
    let level = game::spawn_demo_level(&mut world, script);
    let pilot = Autopilot::demo_route(&level, world.resource::<InputState>());
    world.insert_resource(pilot);

    let mut update = game::build_schedule();
    update.add_systems(autopilot_system.before(update_input_state));
    update.add_systems(log_presentation_messages.after(glow_tick_system));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {e}");
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    let mut frame = 0;
    while frame < cli.frames {
        update_world_time(&mut world, cli.dt);
        update.run(&mut world);
        world.clear_trackers();
        frame += 1;

        {
            let mut director = world.resource_mut::<SceneDirector>();
            if let Some(scene) = director.take_pending() {
                info!("Scene '{}' requested; the host would load it now", scene);
                break;
            }
            if director.quit_requested() {
                info!("Quit requested");
                break;
            }
        }
        if world.resource::<Autopilot>().is_done() {
            info!("Autopilot route finished");
            break;
        }
    }

    let elapsed = world.resource::<WorldTime>().elapsed;
    info!("Stopped after {} frames ({:.2}s simulated)", frame, elapsed);
    let mut doors = world.query::<(Entity, &Door)>();
    for (entity, door) in doors.iter(&world) {
        info!("Door {:?} ended {:?}", entity, door.state());
    }
}
