//! Source-texture sub-rectangle with an all-zero "invalid" sentinel.

use serde::{Deserialize, Serialize};

/// A rectangle in source-texture pixel space.
///
/// The all-zero rect is the designated "no such frame" sentinel: atlas
/// lookups for missing keys return it, and [`FrameRect::is_valid`] is the
/// negation of [`FrameRect::is_zero`]. A rect is only invalid when all four
/// fields are exactly zero; `FrameRect { x: 5.0, .. }` with zero size is
/// still valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// The "no such frame" sentinel.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.w == 0.0 && self.h == 0.0
    }

    pub fn is_valid(&self) -> bool {
        !self.is_zero()
    }

    /// Inclusive point containment test.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}
