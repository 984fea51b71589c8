//! Stagehand library.
//!
//! Level behaviors for a first-person 3D game (doors, levers, pressure
//! plates, NPC dialogue, an enemy chaser, hazards, portals) built on one
//! reusable core: the interruptible timed [`sequencer`]. Everything is exposed
//! as `bevy_ecs` components, resources, systems, and events so a host can run
//! the level schedule and consume its output.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod presentation;
pub mod resources;
pub mod sequencer;
pub mod systems;
