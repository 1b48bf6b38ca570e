use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::framerect::FrameRect;

/// Screen-space hit rectangle for pointer dispatch.
///
/// `rect` is resolver output (anchored position plus scaled size); do not
/// write it directly. `touchable` is the element's own interactivity flag;
/// dispatch additionally requires the sprite to be visible, so hiding an
/// element suspends its touchability without clobbering this flag.
/// `touched` marks the current pointer-capture owner.
#[derive(Debug, Clone, Copy, PartialEq, Component, Default)]
pub struct TouchArea {
    pub rect: FrameRect,
    pub touchable: bool,
    pub touched: bool,
}

impl TouchArea {
    pub fn new(touchable: bool) -> Self {
        Self {
            rect: FrameRect::zero(),
            touchable,
            touched: false,
        }
    }

    /// Point containment in screen space. A not-yet-resolved (all-zero)
    /// rect never registers a hit.
    pub fn hit(&self, point: Vec2) -> bool {
        self.rect.is_valid() && self.rect.contains(point.x, point.y)
    }
}
