//! ECS components for level entities.
//!
//! Components hold the per-entity state of each behavior. The logic that
//! advances them lives next to the data where it can be tested without a
//! world (doors, dialogue, glow); the systems in [`crate::systems`] only
//! wire that logic to time, input, and zone events.
//!
//! Submodules overview:
//! - [`chaser`] – enemy that runs straight at the player
//! - [`dialogue`] – NPC dialogue sessions and JSON scripts
//! - [`disabled`] – fail-stop marker for entities with broken setup
//! - [`door`] – sliding-panel doors on the action sequencer
//! - [`glow`] – emission intensity that fades with player proximity
//! - [`group`] – category tag (`"player"`, `"enemy"`)
//! - [`hazard`] – volumes that down whoever enters
//! - [`lever`] – interact-to-toggle door controller
//! - [`mapposition`] – world-space position
//! - [`player`] – first-person controller and look angles
//! - [`portal`] – scene transition trigger
//! - [`pressureplate`] – hold-to-open door controller
//! - [`triggerzone`] – trigger volumes and their occupancy

pub mod chaser;
pub mod dialogue;
pub mod disabled;
pub mod door;
pub mod glow;
pub mod group;
pub mod hazard;
pub mod lever;
pub mod mapposition;
pub mod player;
pub mod portal;
pub mod pressureplate;
pub mod triggerzone;
