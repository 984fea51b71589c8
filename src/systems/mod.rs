//! Level systems and observers.
//!
//! Systems run in the per-frame schedule built by
//! [`crate::game::build_schedule`]; observers react to events triggered by
//! those systems within the same frame.
//!
//! Submodules overview
//! - [`chaser`] – move enemies toward the player and report catches
//! - [`cursor`] – capture and release the mouse cursor
//! - [`dialogue`] – start, skip, and time NPC dialogue
//! - [`door`] – set up doors, apply requests, advance panels
//! - [`glow`] – fade glow in and out with zone occupancy
//! - [`hazard`] – down visitors of hazard zones and respawn them
//! - [`input`] – derive key edges from the host's raw input
//! - [`lever`] – toggle doors from levers on interact
//! - [`player`] – first-person walking and mouse look
//! - [`portal`] – request scene transitions
//! - [`presentation`] – ECS presentation sink and message upkeep
//! - [`pressureplate`] – open and close doors from plates
//! - [`time`] – update simulation time and delta
//! - [`zone`] – trigger zone occupancy and enter/exit events

pub mod chaser;
pub mod cursor;
pub mod dialogue;
pub mod door;
pub mod glow;
pub mod hazard;
pub mod input;
pub mod lever;
pub mod player;
pub mod portal;
pub mod presentation;
pub mod pressureplate;
pub mod time;
pub mod zone;
