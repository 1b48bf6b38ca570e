//! Resolved screen-space position component.
//!
//! [`ScreenPosition`] holds the absolute top-left corner of an element in
//! screen pixels. It is the *output* of the anchored-layout resolver, not
//! an input: hosts position elements through their
//! [`Anchor`](super::anchor::Anchor) descriptor, and the resolver rewrites
//! this component whenever the descriptor is dirty.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Absolute top-left position of an element in screen pixels.
///
/// Written by the layout resolver; read by hit testing and by whatever
/// renders the stage.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vec2,
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// X coordinate.
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Set the entire position.
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}
