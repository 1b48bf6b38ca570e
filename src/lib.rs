//! 2D UI animation stage built on `bevy_ecs`.
//!
//! A rendering-agnostic layer for sprite UI work: anchored layout with
//! percentage or pixel offsets, property tweens driven by an easing library,
//! sprite-sheet frame animation, z-ordered touch dispatch with pointer
//! capture, and sound cue messages for the host's mixer.
//!
//! # Module map
//!
//! - [`stage`] – [`UiStage`](stage::UiStage), the world-plus-schedule facade
//! - [`components`] – per-element data (anchor, sprite, tweens, touch area)
//! - [`resources`] – world-level state (atlas table, clocks, pointer, config)
//! - [`systems`] – the per-tick pipeline
//! - [`events`] – observer events and drained messages for the host
//! - [`easing`] – easing curve library
//! - [`error`] – loader and registry error types
//!
//! # Embedding
//!
//! The host owns the frame loop, the window and the renderer; the stage owns
//! element state. Per frame:
//!
//! 1. Feed input with [`UiStage::set_pointer`](stage::UiStage::set_pointer)
//! 2. Advance with [`UiStage::tick`](stage::UiStage::tick)
//! 3. Drain [`AudioCmd`](events::audio::AudioCmd) messages to the mixer
//! 4. Render by querying sprites with their resolved screen positions

pub mod components;
pub mod easing;
pub mod error;
pub mod events;
pub mod resources;
pub mod stage;
pub mod systems;
