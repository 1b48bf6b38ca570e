//! ECS components for UI elements.
//!
//! This module groups all component types that make up an animated element.
//! A full element carries a sprite, an anchor, resolver outputs, visual
//! modifiers, and optionally tweens, a frame animation, and sound cues.
//!
//! Submodules overview:
//! - [`anchor`] – anchored-layout descriptor and the pure anchor math
//! - [`angle`] – rotation angle in degrees
//! - [`frameanim`] – frame-sequence playback over atlas sub-rectangles
//! - [`framerect`] – source-texture sub-rectangle with the all-zero sentinel
//! - [`scale`] – 2D scale factor applied to the natural size
//! - [`screenposition`] – resolved screen-space position (resolver output)
//! - [`soundcues`] – sound ids fired at interaction and tween milestones
//! - [`sprite`] – texture reference, natural size, and visibility
//! - [`tint`] – color modulation and opacity
//! - [`toucharea`] – screen-space hit rectangle for pointer dispatch
//! - [`tween`] – animated interpolation of position, scale, angle, alpha, color
//! - [`uiname`] – optional lookup name for an element
//! - [`zindex`] – stacking order (lower is nearer)

pub mod anchor;
pub mod angle;
pub mod frameanim;
pub mod framerect;
pub mod scale;
pub mod screenposition;
pub mod soundcues;
pub mod sprite;
pub mod tint;
pub mod toucharea;
pub mod tween;
pub mod uiname;
pub mod zindex;
