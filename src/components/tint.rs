//! Color tint component for animated elements.
//!
//! The [`Tint`] component carries the RGB modulation and the opacity of an
//! element, kept as separate channels on purpose: a color tween lerps only
//! `r`/`g`/`b` and leaves the element's current alpha intact, while an
//! alpha tween touches only `alpha`.

use bevy_ecs::prelude::Component;

/// RGB tint plus a separate alpha channel.
///
/// `alpha` is a normalized opacity in `[0,1]`; the RGB channels are bytes.
/// [`Tint::rgba8`] folds both into the 4-byte form a renderer consumes.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Tint {
    /// Create a new opaque Tint with the specified RGB values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Replace the RGB channels, preserving the current alpha.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// RGBA bytes for draw calls; alpha is clamped before conversion.
    pub fn rgba8(&self) -> [u8; 4] {
        [
            self.r,
            self.g,
            self.b,
            (self.alpha.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque() {
        let t = Tint::new(100, 150, 200);
        assert_eq!(t.r, 100);
        assert_eq!(t.g, 150);
        assert_eq!(t.b, 200);
        assert_eq!(t.alpha, 1.0);
    }

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!((t.r, t.g, t.b), (255, 255, 255));
        assert_eq!(t.alpha, 1.0);
    }

    #[test]
    fn test_set_rgb_preserves_alpha() {
        let mut t = Tint::new(10, 20, 30).with_alpha(0.25);
        t.set_rgb(200, 100, 50);
        assert_eq!((t.r, t.g, t.b), (200, 100, 50));
        assert_eq!(t.alpha, 0.25);
    }

    #[test]
    fn test_rgba8_folds_alpha() {
        let t = Tint::new(255, 255, 255).with_alpha(0.5);
        assert_eq!(t.rgba8(), [255, 255, 255, 127]);
    }

    #[test]
    fn test_rgba8_clamps_out_of_range_alpha() {
        // Overshoot easings can push alpha past the ends mid-tween.
        let t = Tint::new(0, 0, 0).with_alpha(1.4);
        assert_eq!(t.rgba8()[3], 255);
        let t = Tint::new(0, 0, 0).with_alpha(-0.2);
        assert_eq!(t.rgba8()[3], 0);
    }
}
