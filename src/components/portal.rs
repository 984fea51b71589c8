use bevy_ecs::prelude::Component;

/// Scene transition trigger. Entering the zone asks the
/// [`SceneDirector`](crate::resources::scene::SceneDirector) for `scene`.
#[derive(Component, Clone, Debug)]
pub struct Portal {
    pub scene: String,
}

impl Portal {
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
        }
    }
}
