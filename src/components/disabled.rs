//! Fail-stop marker.
//!
//! An entity whose required setup is broken gets [`Disabled`] once, with the
//! reason logged at that moment. Systems filter it out with
//! `Without<Disabled>` for the rest of the level.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Disabled;
