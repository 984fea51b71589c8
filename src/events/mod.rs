//! Event and message types.
//!
//! Observer events ([`Event`](bevy_ecs::prelude::Event)) carry requests and
//! notifications between behaviors within the frame. Messages
//! ([`Message`](bevy_ecs::message::Message)) carry output for the host to
//! consume after the frame.
//!
//! Submodules:
//! - [`audio`] – clip playback commands (message)
//! - [`door`] – door requests and state changes
//! - [`input`] – press/release of logical input actions
//! - [`player`] – player downed by a hazard or an enemy
//! - [`presentation`] – dialogue text and animator triggers (message)
//! - [`zone`] – trigger zone enter/exit
pub mod audio;
pub mod door;
pub mod input;
pub mod player;
pub mod presentation;
pub mod zone;
