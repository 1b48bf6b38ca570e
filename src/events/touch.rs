//! Pointer interaction events.
//!
//! The dispatch system triggers [`TouchDown`] when a held press lands on a
//! touchable element, and [`TouchUp`] when the press owned by an element
//! ends. Each fires exactly once per transition, on the element that owns
//! the press; the pointer may wander outside the element while held without
//! losing ownership.
//!
//! # Example
//!
//! ```ignore
//! stage.observe(|trigger: On<TouchUp>, names: Query<&UiName>| {
//!     if let Ok(name) = names.get(trigger.event().entity) {
//!         println!("clicked {}", name.0);
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::systems::pointer`] – the dispatch system that triggers these
//! - [`crate::resources::pointer::PointerCapture`] – press ownership

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Event triggered when a held press lands on a touchable element.
///
/// A press that starts elsewhere and is dragged onto the element claims it
/// too; the trigger condition is "pressed and inside while unowned", not
/// "pressed this tick".
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TouchDown {
    /// The element that claimed the press.
    pub entity: Entity,
    /// Pointer position in screen pixels.
    pub pos: Vec2,
}

/// Event triggered when the press owned by an element ends.
///
/// Fires wherever the pointer is at release; ownership, not position,
/// decides the recipient.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TouchUp {
    /// The element that owned the press.
    pub entity: Entity,
    /// Pointer position in screen pixels.
    pub pos: Vec2,
}
