//! Portal observer: stepping into a portal zone requests its scene from the
//! [`SceneDirector`](crate::resources::scene::SceneDirector).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::disabled::Disabled;
use crate::components::portal::Portal;
use crate::events::zone::ZoneEntered;
use crate::resources::scene::SceneDirector;

/// Ask for the portal's scene when a visitor steps in.
pub fn portal_observer(
    trigger: On<ZoneEntered>,
    portals: Query<&Portal, Without<Disabled>>,
    mut director: ResMut<SceneDirector>,
) {
    let Ok(portal) = portals.get(trigger.event().zone) else {
        return;
    };
    log::info!(
        "Portal {:?}: {} -> {}",
        trigger.event().zone,
        director.current(),
        portal.scene
    );
    director.request_scene(portal.scene.clone());
}
