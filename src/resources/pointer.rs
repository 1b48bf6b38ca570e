//! Per-tick pointer state fed by the host.
//!
//! The host writes [`PointerState`] before each tick from whatever input
//! backend it uses (mouse, touch). The dispatch system reads it and keeps
//! [`PointerCapture`] pointing at the element that owns the press, if any.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

/// Pointer position and button state for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Position in screen pixels.
    pub pos: Vec2,
    /// Whether the button/finger is currently down.
    pub pressed: bool,
    /// Whether the press started this tick.
    pub just_pressed: bool,
    /// Whether the press ended this tick.
    pub just_released: bool,
}

impl PointerState {
    /// Convenience for hosts that only track up/down transitions: derives
    /// the edge flags by comparing against the previous tick's state.
    pub fn advance(&mut self, pos: Vec2, pressed: bool) {
        self.just_pressed = pressed && !self.pressed;
        self.just_released = !pressed && self.pressed;
        self.pos = pos;
        self.pressed = pressed;
    }
}

/// The element currently owning the pointer press.
///
/// While set, dispatch polls only the owner; the scan for a new owner
/// resumes once the press ends or the owner stops being touchable.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerCapture {
    pub owner: Option<Entity>,
}
