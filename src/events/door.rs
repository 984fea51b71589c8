//! Door requests and state notifications.
//!
//! Controllers never touch a [`Door`](crate::components::door::Door)
//! directly. They trigger a [`DoorRequest`] carrying the door's entity and
//! [`door_request_observer`](crate::systems::door::door_request_observer)
//! applies it on the spot, preempting any motion in progress.

use bevy_ecs::prelude::*;

use crate::components::door::{DoorAction, DoorState};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorRequest {
    pub door: Entity,
    pub action: DoorAction,
}

/// Triggered whenever a door's logical state changes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorStateChanged {
    pub door: Entity,
    pub from: DoorState,
    pub to: DoorState,
}
