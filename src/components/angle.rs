use bevy_ecs::prelude::Component;

/// Rotation in degrees about the element's center.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Angle {
    pub degrees: f32,
}

impl Angle {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
