//! Stage systems.
//!
//! This module groups all ECS systems that advance animation, layout, and
//! pointer input each tick.
//!
//! Submodules overview
//! - [`audio`] – advance the [`crate::events::audio::AudioCmd`] message queue
//! - [`frameanim`] – step sprite-sheet frame sequences
//! - [`layout`] – flag and resolve dirty anchored-layout descriptors
//! - [`pointer`] – hit testing, press capture, and touch event dispatch
//! - [`time`] – update the stage clocks and deltas
//! - [`tween`] – animate position, scale, angle, alpha, and color over time

pub mod audio;
pub mod frameanim;
pub mod layout;
pub mod pointer;
pub mod time;
pub mod tween;
