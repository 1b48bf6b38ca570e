//! Tween components for animated interpolation of element properties.
//!
//! One component type per animatable property:
//! - [`TweenPosition`] – animate the anchored offset (normalized, parent-relative)
//! - [`TweenScale`] – animate [`Scale`](super::scale::Scale) uniformly
//! - [`TweenAngle`] – animate [`Angle`](super::angle::Angle)
//! - [`TweenAlpha`] – animate the alpha channel of [`Tint`](super::tint::Tint)
//! - [`TweenColor`] – animate the RGB channels of [`Tint`](super::tint::Tint)
//!
//! Because each is a distinct component, inserting a new tween for a property
//! replaces the one already running on that entity: at most one tween per
//! property per element, and a replaced tween never reports completion.
//! Interpolation curves come from [`Ease`]; the update systems live in
//! [`crate::systems::tween`].

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::easing::Ease;

/// Identifies which property a tween animates.
///
/// Carried by [`TweenFinished`](crate::events::tween::TweenFinished) and used
/// to address a single tween in the per-property playback controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    Position,
    Scale,
    Angle,
    Alpha,
    Color,
}

impl TweenProperty {
    /// Every property, in the order the update systems run.
    pub const ALL: [TweenProperty; 5] = [
        TweenProperty::Position,
        TweenProperty::Scale,
        TweenProperty::Angle,
        TweenProperty::Alpha,
        TweenProperty::Color,
    ];
}

/// Animates an element's position between two normalized offsets.
///
/// `from` and `to` are parent-relative fractions (element position divided by
/// parent size), so a tween keeps meaning across screen sizes. The update
/// system feeds interpolated values back through the element's
/// [`Anchor`](super::anchor::Anchor) as a top-left percentage offset.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting offset, as fractions of the parent size.
    pub from: Vec2,
    /// Ending offset, as fractions of the parent size.
    pub to: Vec2,
    /// Seconds to wait before interpolation begins.
    pub delay: f32,
    /// Duration in seconds, excluding the delay.
    pub duration: f32,
    /// Easing curve applied to normalized progress.
    pub easing: Ease,
    /// Clock time at which the delay countdown started. Stamped from the
    /// stage clock at creation, or on first update when still `None`.
    pub start_at: Option<f32>,
    /// Whether the tween is currently advancing.
    pub running: bool,
    /// Set once the tween has reached its target (or was stopped).
    pub finished: bool,
    /// Swap `from`/`to` and restart once on completion.
    pub autoreverse: bool,
    /// Read the scaled clock when true, the real clock otherwise.
    pub affected_by_time_scale: bool,
}

impl TweenPosition {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            delay: 0.0,
            duration,
            easing: Ease::Linear,
            start_at: None,
            running: true,
            finished: false,
            autoreverse: false,
            affected_by_time_scale: true,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_autoreverse(mut self) -> Self {
        self.autoreverse = true;
        self
    }
    pub fn with_unscaled_time(mut self) -> Self {
        self.affected_by_time_scale = false;
        self
    }
    /// Halts the tween without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }
}

/// Animates an element's [`Scale`](super::scale::Scale) between two uniform factors.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    /// Starting scale factor, applied to both axes.
    pub from: f32,
    /// Ending scale factor, applied to both axes.
    pub to: f32,
    /// Seconds to wait before interpolation begins.
    pub delay: f32,
    /// Duration in seconds, excluding the delay.
    pub duration: f32,
    /// Easing curve applied to normalized progress.
    pub easing: Ease,
    /// Clock time at which the delay countdown started. Stamped from the
    /// stage clock at creation, or on first update when still `None`.
    pub start_at: Option<f32>,
    /// Whether the tween is currently advancing.
    pub running: bool,
    /// Set once the tween has reached its target (or was stopped).
    pub finished: bool,
    /// Swap `from`/`to` and restart once on completion.
    pub autoreverse: bool,
    /// Read the scaled clock when true, the real clock otherwise.
    pub affected_by_time_scale: bool,
}

impl TweenScale {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            delay: 0.0,
            duration,
            easing: Ease::Linear,
            start_at: None,
            running: true,
            finished: false,
            autoreverse: false,
            affected_by_time_scale: true,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_autoreverse(mut self) -> Self {
        self.autoreverse = true;
        self
    }
    pub fn with_unscaled_time(mut self) -> Self {
        self.affected_by_time_scale = false;
        self
    }
    /// Halts the tween without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }
}

/// Animates an element's [`Angle`](super::angle::Angle) between two values in degrees.
#[derive(Component, Clone, Debug)]
pub struct TweenAngle {
    /// Starting angle in degrees.
    pub from: f32,
    /// Ending angle in degrees.
    pub to: f32,
    /// Seconds to wait before interpolation begins.
    pub delay: f32,
    /// Duration in seconds, excluding the delay.
    pub duration: f32,
    /// Easing curve applied to normalized progress.
    pub easing: Ease,
    /// Clock time at which the delay countdown started. Stamped from the
    /// stage clock at creation, or on first update when still `None`.
    pub start_at: Option<f32>,
    /// Whether the tween is currently advancing.
    pub running: bool,
    /// Set once the tween has reached its target (or was stopped).
    pub finished: bool,
    /// Swap `from`/`to` and restart once on completion.
    pub autoreverse: bool,
    /// Read the scaled clock when true, the real clock otherwise.
    pub affected_by_time_scale: bool,
}

impl TweenAngle {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAngle {
            from,
            to,
            delay: 0.0,
            duration,
            easing: Ease::Linear,
            start_at: None,
            running: true,
            finished: false,
            autoreverse: false,
            affected_by_time_scale: true,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_autoreverse(mut self) -> Self {
        self.autoreverse = true;
        self
    }
    pub fn with_unscaled_time(mut self) -> Self {
        self.affected_by_time_scale = false;
        self
    }
    /// Halts the tween without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }
}

/// Animates the alpha channel of an element's [`Tint`](super::tint::Tint).
///
/// Only alpha is touched; the RGB channels keep whatever a concurrent
/// [`TweenColor`] (or nothing) writes to them.
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    /// Starting opacity, `0.0` transparent to `1.0` opaque.
    pub from: f32,
    /// Ending opacity, `0.0` transparent to `1.0` opaque.
    pub to: f32,
    /// Seconds to wait before interpolation begins.
    pub delay: f32,
    /// Duration in seconds, excluding the delay.
    pub duration: f32,
    /// Easing curve applied to normalized progress.
    pub easing: Ease,
    /// Clock time at which the delay countdown started. Stamped from the
    /// stage clock at creation, or on first update when still `None`.
    pub start_at: Option<f32>,
    /// Whether the tween is currently advancing.
    pub running: bool,
    /// Set once the tween has reached its target (or was stopped).
    pub finished: bool,
    /// Swap `from`/`to` and restart once on completion.
    pub autoreverse: bool,
    /// Read the scaled clock when true, the real clock otherwise.
    pub affected_by_time_scale: bool,
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            from,
            to,
            delay: 0.0,
            duration,
            easing: Ease::Linear,
            start_at: None,
            running: true,
            finished: false,
            autoreverse: false,
            affected_by_time_scale: true,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_autoreverse(mut self) -> Self {
        self.autoreverse = true;
        self
    }
    pub fn with_unscaled_time(mut self) -> Self {
        self.affected_by_time_scale = false;
        self
    }
    /// Halts the tween without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }
}

/// Animates the RGB channels of an element's [`Tint`](super::tint::Tint).
///
/// Each channel is interpolated independently; the alpha channel is left
/// untouched so a fade can run alongside a color sweep.
#[derive(Component, Clone, Debug)]
pub struct TweenColor {
    /// Starting color as `[r, g, b]`.
    pub from: [u8; 3],
    /// Ending color as `[r, g, b]`.
    pub to: [u8; 3],
    /// Seconds to wait before interpolation begins.
    pub delay: f32,
    /// Duration in seconds, excluding the delay.
    pub duration: f32,
    /// Easing curve applied to normalized progress.
    pub easing: Ease,
    /// Clock time at which the delay countdown started. Stamped from the
    /// stage clock at creation, or on first update when still `None`.
    pub start_at: Option<f32>,
    /// Whether the tween is currently advancing.
    pub running: bool,
    /// Set once the tween has reached its target (or was stopped).
    pub finished: bool,
    /// Swap `from`/`to` and restart once on completion.
    pub autoreverse: bool,
    /// Read the scaled clock when true, the real clock otherwise.
    pub affected_by_time_scale: bool,
}

impl TweenColor {
    pub fn new(from: [u8; 3], to: [u8; 3], duration: f32) -> Self {
        TweenColor {
            from,
            to,
            delay: 0.0,
            duration,
            easing: Ease::Linear,
            start_at: None,
            running: true,
            finished: false,
            autoreverse: false,
            affected_by_time_scale: true,
        }
    }
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
    pub fn with_autoreverse(mut self) -> Self {
        self.autoreverse = true;
        self
    }
    pub fn with_unscaled_time(mut self) -> Self {
        self.affected_by_time_scale = false;
        self
    }
    /// Halts the tween without reporting completion.
    pub fn stop(&mut self) {
        self.running = false;
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    // ==================== TWEEN POSITION TESTS ====================

    #[test]
    fn test_tween_position_new() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(0.5, 0.25);
        let tw = TweenPosition::new(from, to, 2.0);

        assert!(vec_approx_eq(tw.from, from));
        assert!(vec_approx_eq(tw.to, to));
        assert!(approx_eq(tw.delay, 0.0));
        assert!(approx_eq(tw.duration, 2.0));
        assert_eq!(tw.easing, Ease::Linear);
        assert!(tw.start_at.is_none());
        assert!(tw.running);
        assert!(!tw.finished);
        assert!(!tw.autoreverse);
        assert!(tw.affected_by_time_scale);
    }

    #[test]
    fn test_tween_position_builder_chaining() {
        let tw = TweenPosition::new(Vec2::ZERO, Vec2::ONE, 1.0)
            .with_delay(0.5)
            .with_easing(Ease::QuartOut)
            .with_autoreverse()
            .with_unscaled_time();

        assert!(approx_eq(tw.delay, 0.5));
        assert_eq!(tw.easing, Ease::QuartOut);
        assert!(tw.autoreverse);
        assert!(!tw.affected_by_time_scale);
    }

    #[test]
    fn test_tween_position_stop() {
        let mut tw = TweenPosition::new(Vec2::ZERO, Vec2::ONE, 1.0);
        tw.stop();
        assert!(!tw.running);
        assert!(tw.finished);
    }

    // ==================== TWEEN SCALE TESTS ====================

    #[test]
    fn test_tween_scale_new() {
        let tw = TweenScale::new(1.0, 2.0, 0.5);

        assert!(approx_eq(tw.from, 1.0));
        assert!(approx_eq(tw.to, 2.0));
        assert!(approx_eq(tw.duration, 0.5));
        assert_eq!(tw.easing, Ease::Linear);
        assert!(tw.running);
        assert!(!tw.finished);
    }

    #[test]
    fn test_tween_scale_with_easing() {
        let tw = TweenScale::new(1.0, 2.0, 1.0).with_easing(Ease::BackOut);
        assert_eq!(tw.easing, Ease::BackOut);
    }

    // ==================== TWEEN ANGLE TESTS ====================

    #[test]
    fn test_tween_angle_new() {
        let tw = TweenAngle::new(0.0, 360.0, 1.5);

        assert!(approx_eq(tw.from, 0.0));
        assert!(approx_eq(tw.to, 360.0));
        assert!(approx_eq(tw.duration, 1.5));
        assert!(tw.running);
    }

    #[test]
    fn test_tween_angle_negative_angles() {
        let tw = TweenAngle::new(-90.0, 90.0, 1.0);
        assert!(approx_eq(tw.from, -90.0));
        assert!(approx_eq(tw.to, 90.0));
    }

    // ==================== TWEEN ALPHA TESTS ====================

    #[test]
    fn test_tween_alpha_new() {
        let tw = TweenAlpha::new(1.0, 0.0, 0.25);

        assert!(approx_eq(tw.from, 1.0));
        assert!(approx_eq(tw.to, 0.0));
        assert!(approx_eq(tw.duration, 0.25));
        assert!(tw.running);
        assert!(!tw.finished);
    }

    #[test]
    fn test_tween_alpha_with_delay() {
        let tw = TweenAlpha::new(0.0, 1.0, 1.0).with_delay(2.0);
        assert!(approx_eq(tw.delay, 2.0));
        assert!(tw.start_at.is_none());
    }

    // ==================== TWEEN COLOR TESTS ====================

    #[test]
    fn test_tween_color_new() {
        let tw = TweenColor::new([255, 255, 255], [255, 0, 0], 1.0);

        assert_eq!(tw.from, [255, 255, 255]);
        assert_eq!(tw.to, [255, 0, 0]);
        assert!(approx_eq(tw.duration, 1.0));
        assert!(tw.running);
    }

    #[test]
    fn test_tween_color_stop() {
        let mut tw = TweenColor::new([0, 0, 0], [255, 255, 255], 1.0);
        tw.stop();
        assert!(!tw.running);
        assert!(tw.finished);
    }

    // ==================== TWEEN PROPERTY TESTS ====================

    #[test]
    fn test_tween_property_is_copy_eq() {
        let p1 = TweenProperty::Alpha;
        let p2 = p1;
        assert_eq!(p1, p2);
        assert_ne!(TweenProperty::Position, TweenProperty::Color);
    }
}
