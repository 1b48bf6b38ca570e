use bevy_ecs::prelude::Component;

/// Scale factors relative to the sprite's natural size. Tweens drive both
/// axes uniformly; the effective on-screen size is natural size times this.
#[derive(Component, Clone, Debug, Copy)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self { x: sx, y: sy }
    }

    pub fn uniform(s: f32) -> Self {
        Self::new(s, s)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
