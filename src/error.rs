//! Error types for loader and registry entry points.
//!
//! Per-tick paths never fail: missing frame lookups yield the zero sentinel
//! rect, out-of-range frame indices are ignored, and degenerate divisions
//! short-circuit to zero. Errors here only surface from explicit calls such
//! as atlas loading, element creation or parenting.

use thiserror::Error;

/// Errors raised while loading a sprite-atlas descriptor.
#[derive(Error, Debug)]
pub enum AtlasError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("no atlas frame found for {0}")]
    NoFrames(String),
}

/// Errors raised by [`UiStage`](crate::stage::UiStage) operations.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("no atlas loaded; load one before creating atlas-backed elements")]
    AtlasNotLoaded,
    #[error(transparent)]
    Atlas(#[from] AtlasError),
    #[error("unknown entity {0:?}")]
    UnknownEntity(bevy_ecs::entity::Entity),
    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    ParentCycle {
        child: bevy_ecs::entity::Entity,
        parent: bevy_ecs::entity::Entity,
    },
    #[error("config load failed: {0}")]
    Config(String),
}
