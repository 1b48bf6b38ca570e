//! Screen size resource.
//!
//! Stores the current host viewport dimensions in pixels. Elements anchored
//! to the screen treat this as their parent box, so replacing the resource
//! re-flows the whole layout.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
