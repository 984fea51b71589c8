//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world: timing, input, tuning, and the
//! hooks the host polls after each frame.
//!
//! Overview
//! - `clips` – known audio clip lengths for dialogue timing
//! - `cursor` – whether the mouse cursor is captured for mouse look
//! - `input` – raw host input and per-frame action state
//! - `levelconfig` – INI-backed tuning values
//! - `respawn` – where a downed player returns to
//! - `scene` – current scene, pending transition, and quit request
//! - `worldtime` – simulation time and delta
pub mod clips;
pub mod cursor;
pub mod input;
pub mod levelconfig;
pub mod respawn;
pub mod scene;
pub mod worldtime;
