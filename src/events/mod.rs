//! Event types exchanged with the host.
//!
//! This module groups the outward-facing notifications of the stage. Two
//! delivery styles are used, matching how hosts consume them:
//! observer events (`#[derive(Event)]`, triggered on an entity, reacted to
//! synchronously) and buffered messages (`#[derive(Message)]`, drained once
//! per tick).
//!
//! Submodules:
//! - [`audio`] – outbound sound-effect commands for the host's mixer
//! - [`touch`] – touch-down/up notifications from pointer dispatch
//! - [`tween`] – tween completion notifications
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod audio;
pub mod touch;
pub mod tween;
