//! Outbound audio commands.
//!
//! The stage never plays audio itself. Sound cues attached to elements
//! resolve into [`AudioCmd`] messages; the host drains them after each tick
//! (via a `MessageReader` or [`UiStage::drain_audio`]) and routes them to
//! whatever mixer it uses.
//!
//! [`UiStage::drain_audio`]: crate::stage::UiStage::drain_audio

use bevy_ecs::message::Message;

/// Commands sent to the host's audio backend.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum AudioCmd {
    /// Play a sound effect once, or looped until the host stops it.
    PlayFx { id: String, looped: bool },
}
