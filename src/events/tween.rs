//! Tween completion events.
//!
//! When a tween reaches its target (and is not auto-reversing into a return
//! leg), a [`TweenFinished`] is triggered on the element. Stopping a tween
//! early, or replacing it by inserting a new tween for the same property,
//! never fires this.
//!
//! # Example
//!
//! ```ignore
//! stage.observe(|trigger: On<TweenFinished>, mut commands: Commands| {
//!     let ev = trigger.event();
//!     if ev.property == TweenProperty::Alpha {
//!         commands.entity(ev.entity).despawn();
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::components::tween`] – the tween components
//! - [`crate::systems::tween`] – the update systems that trigger this

use bevy_ecs::prelude::*;

use crate::components::tween::TweenProperty;

/// Event triggered when a tween completes naturally.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinished {
    /// The element the tween was animating.
    pub entity: Entity,
    /// Which property finished.
    pub property: TweenProperty,
}
