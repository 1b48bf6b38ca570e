//! Z-index component for stacking order.
//!
//! The [`ZIndex`] component controls the stacking of elements. Lower values
//! are nearer the viewer: pointer dispatch scans elements in ascending
//! z-index so front-most elements see the pointer first, and a renderer
//! should draw in descending order for the same stacking.

use bevy_ecs::prelude::Component;

/// Conventional stacking bands. `Modal` outranks everything.
///
/// The gaps leave room for fine-grained ordering within a band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum OrderBand {
    Modal = 0,
    Front = 250,
    #[default]
    Middle = 500,
    Back = 750,
}

/// Stacking order of an element. Lower values are in front.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl From<OrderBand> for ZIndex {
    fn from(band: OrderBand) -> Self {
        ZIndex(band as i32)
    }
}
