//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: pointer input, timing, atlas frame
//! tables, and configuration. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `atlas` – frame rectangles of every loaded sprite atlas, keyed by name
//! - `pointer` – per-tick pointer state written by the host, plus capture
//! - `screensize` – current viewport dimensions in pixels
//! - `stageconfig` – INI-backed settings (screen, HD assets, timing)
//! - `worldtime` – scaled and real stage clocks
pub mod atlas;
pub mod pointer;
pub mod screensize;
pub mod stageconfig;
pub mod worldtime;
