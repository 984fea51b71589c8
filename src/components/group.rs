use bevy_ecs::prelude::Component;

/// Category tag used by trigger zones and chasers to pick their visitors
/// (`"player"`, `"enemy"`, ...).
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
