//! Tween animation systems.
//!
//! One system per animatable property:
//! - [`update_tween_position`] – feeds the element's [`Anchor`](crate::components::anchor::Anchor)
//! - [`update_tween_scale`] – writes [`Scale`](crate::components::scale::Scale)
//! - [`update_tween_angle`] – writes [`Angle`](crate::components::angle::Angle)
//! - [`update_tween_alpha`] – writes the alpha channel of [`Tint`](crate::components::tint::Tint)
//! - [`update_tween_color`] – writes the RGB channels of [`Tint`](crate::components::tint::Tint)
//!
//! Tweens are clock-driven rather than delta-accumulating: each reads the
//! stage clock selected by its `affected_by_time_scale` flag, so a paused or
//! slowed stage affects exactly the tweens that opted in. A tween is pending
//! until its stamped start time, then applies its eased value every tick up
//! to and including the completing tick, which lands exactly on the target.
//!
//! On natural completion a tween either swaps ends and restarts (one
//! auto-reverse leg) or marks itself finished, fires the element's
//! easing-complete sound cue, and triggers
//! [`TweenFinished`](crate::events::tween::TweenFinished).
//! [`reap_finished_tweens`] then removes finished tween components; a reaped
//! or stopped tween can never be resumed.

use bevy_ecs::prelude::*;

use crate::components::anchor::Anchor;
use crate::components::angle::Angle;
use crate::components::scale::Scale;
use crate::components::soundcues::SoundCues;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::tween::{
    TweenAlpha, TweenAngle, TweenColor, TweenPosition, TweenProperty, TweenScale,
};
use crate::easing::Ease;
use crate::events::audio::AudioCmd;
use crate::events::tween::TweenFinished;
use crate::resources::worldtime::WorldTime;

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Eased progress of a tween at clock time `now`.
///
/// Returns `None` while the tween is still pending (before its start time),
/// otherwise the eased value and whether the raw progress has reached the
/// end. A non-positive duration completes immediately at full value.
pub(crate) fn tween_progress(
    now: f32,
    start_at: f32,
    duration: f32,
    easing: Ease,
) -> Option<(f32, bool)> {
    if now < start_at {
        return None;
    }
    let raw = if duration <= 0.0 {
        1.0
    } else {
        ((now - start_at) / duration).clamp(0.0, 1.0)
    };
    Some((easing.apply(raw), raw >= 1.0))
}

/// Fire the completion side effects: the element's easing-complete sound cue
/// (when set) and a [`TweenFinished`] trigger.
fn emit_finished(
    commands: &mut Commands,
    audio: &mut MessageWriter<AudioCmd>,
    cues: &Query<&SoundCues>,
    entity: Entity,
    property: TweenProperty,
) {
    if let Ok(cues) = cues.get(entity) {
        if let Some(id) = &cues.easing_complete {
            audio.write(AudioCmd::PlayFx {
                id: id.clone(),
                looped: false,
            });
        }
    }
    commands.trigger(TweenFinished { entity, property });
}

/// Animate anchored positions based on [`TweenPosition`] components.
///
/// The interpolated value is a normalized parent-relative offset; it is fed
/// back through the anchor as a top-left percentage position, which marks
/// the layout dirty for the resolver.
pub fn update_tween_position(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    cues: Query<&SoundCues>,
    mut query: Query<(Entity, &mut TweenPosition, &mut Anchor, &Sprite)>,
) {
    for (entity, mut tw, mut anchor, sprite) in query.iter_mut() {
        if !sprite.visible || !tw.running {
            continue;
        }
        let now = time.clock(tw.affected_by_time_scale);
        let delay = tw.delay;
        let start = *tw.start_at.get_or_insert(now + delay);
        let Some((t, completed)) = tween_progress(now, start, tw.duration, tw.easing) else {
            continue;
        };
        let v = tw.from.lerp(tw.to, t);
        anchor.position_from_top_left(v.y, v.x);
        if completed {
            if tw.autoreverse {
                let from = tw.from;
                tw.from = tw.to;
                tw.to = from;
                tw.autoreverse = false;
                tw.start_at = Some(now);
            } else {
                tw.running = false;
                tw.finished = true;
                emit_finished(
                    &mut commands,
                    &mut audio,
                    &cues,
                    entity,
                    TweenProperty::Position,
                );
            }
        }
    }
}

/// Animate uniform scales based on [`TweenScale`] components.
pub fn update_tween_scale(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    cues: Query<&SoundCues>,
    mut query: Query<(Entity, &mut TweenScale, &mut Scale, &Sprite)>,
) {
    for (entity, mut tw, mut scale, sprite) in query.iter_mut() {
        if !sprite.visible || !tw.running {
            continue;
        }
        let now = time.clock(tw.affected_by_time_scale);
        let delay = tw.delay;
        let start = *tw.start_at.get_or_insert(now + delay);
        let Some((t, completed)) = tween_progress(now, start, tw.duration, tw.easing) else {
            continue;
        };
        let v = lerp_f32(tw.from, tw.to, t);
        scale.x = v;
        scale.y = v;
        if completed {
            if tw.autoreverse {
                let from = tw.from;
                tw.from = tw.to;
                tw.to = from;
                tw.autoreverse = false;
                tw.start_at = Some(now);
            } else {
                tw.running = false;
                tw.finished = true;
                emit_finished(
                    &mut commands,
                    &mut audio,
                    &cues,
                    entity,
                    TweenProperty::Scale,
                );
            }
        }
    }
}

/// Animate rotation angles based on [`TweenAngle`] components.
pub fn update_tween_angle(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    cues: Query<&SoundCues>,
    mut query: Query<(Entity, &mut TweenAngle, &mut Angle, &Sprite)>,
) {
    for (entity, mut tw, mut angle, sprite) in query.iter_mut() {
        if !sprite.visible || !tw.running {
            continue;
        }
        let now = time.clock(tw.affected_by_time_scale);
        let delay = tw.delay;
        let start = *tw.start_at.get_or_insert(now + delay);
        let Some((t, completed)) = tween_progress(now, start, tw.duration, tw.easing) else {
            continue;
        };
        angle.degrees = lerp_f32(tw.from, tw.to, t);
        if completed {
            if tw.autoreverse {
                let from = tw.from;
                tw.from = tw.to;
                tw.to = from;
                tw.autoreverse = false;
                tw.start_at = Some(now);
            } else {
                tw.running = false;
                tw.finished = true;
                emit_finished(
                    &mut commands,
                    &mut audio,
                    &cues,
                    entity,
                    TweenProperty::Angle,
                );
            }
        }
    }
}

/// Animate opacity based on [`TweenAlpha`] components. Only the alpha
/// channel of the tint is touched.
pub fn update_tween_alpha(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    cues: Query<&SoundCues>,
    mut query: Query<(Entity, &mut TweenAlpha, &mut Tint, &Sprite)>,
) {
    for (entity, mut tw, mut tint, sprite) in query.iter_mut() {
        if !sprite.visible || !tw.running {
            continue;
        }
        let now = time.clock(tw.affected_by_time_scale);
        let delay = tw.delay;
        let start = *tw.start_at.get_or_insert(now + delay);
        let Some((t, completed)) = tween_progress(now, start, tw.duration, tw.easing) else {
            continue;
        };
        tint.alpha = lerp_f32(tw.from, tw.to, t);
        if completed {
            if tw.autoreverse {
                let from = tw.from;
                tw.from = tw.to;
                tw.to = from;
                tw.autoreverse = false;
                tw.start_at = Some(now);
            } else {
                tw.running = false;
                tw.finished = true;
                emit_finished(
                    &mut commands,
                    &mut audio,
                    &cues,
                    entity,
                    TweenProperty::Alpha,
                );
            }
        }
    }
}

/// Animate RGB color based on [`TweenColor`] components. The alpha channel
/// is preserved so a fade can run alongside.
pub fn update_tween_color(
    time: Res<WorldTime>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    cues: Query<&SoundCues>,
    mut query: Query<(Entity, &mut TweenColor, &mut Tint, &Sprite)>,
) {
    for (entity, mut tw, mut tint, sprite) in query.iter_mut() {
        if !sprite.visible || !tw.running {
            continue;
        }
        let now = time.clock(tw.affected_by_time_scale);
        let delay = tw.delay;
        let start = *tw.start_at.get_or_insert(now + delay);
        let Some((t, completed)) = tween_progress(now, start, tw.duration, tw.easing) else {
            continue;
        };
        // Overshooting curves can leave [0,1]; clamp each channel.
        let r = lerp_f32(tw.from[0] as f32, tw.to[0] as f32, t).clamp(0.0, 255.0) as u8;
        let g = lerp_f32(tw.from[1] as f32, tw.to[1] as f32, t).clamp(0.0, 255.0) as u8;
        let b = lerp_f32(tw.from[2] as f32, tw.to[2] as f32, t).clamp(0.0, 255.0) as u8;
        tint.set_rgb(r, g, b);
        if completed {
            if tw.autoreverse {
                let from = tw.from;
                tw.from = tw.to;
                tw.to = from;
                tw.autoreverse = false;
                tw.start_at = Some(now);
            } else {
                tw.running = false;
                tw.finished = true;
                emit_finished(
                    &mut commands,
                    &mut audio,
                    &cues,
                    entity,
                    TweenProperty::Color,
                );
            }
        }
    }
}

/// Remove tween components that have finished or been stopped.
///
/// Runs after the property systems, so a tween that completes still applies
/// its final value on that tick before disappearing.
pub fn reap_finished_tweens(
    mut commands: Commands,
    positions: Query<(Entity, &TweenPosition)>,
    scales: Query<(Entity, &TweenScale)>,
    angles: Query<(Entity, &TweenAngle)>,
    alphas: Query<(Entity, &TweenAlpha)>,
    colors: Query<(Entity, &TweenColor)>,
) {
    for (entity, tw) in positions.iter() {
        if tw.finished {
            commands.entity(entity).remove::<TweenPosition>();
        }
    }
    for (entity, tw) in scales.iter() {
        if tw.finished {
            commands.entity(entity).remove::<TweenScale>();
        }
    }
    for (entity, tw) in angles.iter() {
        if tw.finished {
            commands.entity(entity).remove::<TweenAngle>();
        }
    }
    for (entity, tw) in alphas.iter() {
        if tw.finished {
            commands.entity(entity).remove::<TweenAlpha>();
        }
    }
    for (entity, tw) in colors.iter() {
        if tw.finished {
            commands.entity(entity).remove::<TweenColor>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== PROGRESS TESTS ====================

    #[test]
    fn test_progress_pending_before_start() {
        assert!(tween_progress(0.5, 1.0, 2.0, Ease::Linear).is_none());
    }

    #[test]
    fn test_progress_zero_at_start() {
        let (t, done) = tween_progress(1.0, 1.0, 2.0, Ease::Linear).unwrap();
        assert!(approx_eq(t, 0.0));
        assert!(!done);
    }

    #[test]
    fn test_progress_midway() {
        let (t, done) = tween_progress(2.0, 1.0, 2.0, Ease::Linear).unwrap();
        assert!(approx_eq(t, 0.5));
        assert!(!done);
    }

    #[test]
    fn test_progress_completes_and_clamps() {
        let (t, done) = tween_progress(10.0, 1.0, 2.0, Ease::Linear).unwrap();
        assert!(approx_eq(t, 1.0));
        assert!(done);
    }

    #[test]
    fn test_progress_exact_end() {
        let (t, done) = tween_progress(3.0, 1.0, 2.0, Ease::Linear).unwrap();
        assert!(approx_eq(t, 1.0));
        assert!(done);
    }

    #[test]
    fn test_progress_zero_duration_completes_immediately() {
        let (t, done) = tween_progress(1.0, 1.0, 0.0, Ease::Linear).unwrap();
        assert!(approx_eq(t, 1.0));
        assert!(done);
    }

    #[test]
    fn test_progress_applies_easing() {
        let (t, _) = tween_progress(2.0, 1.0, 2.0, Ease::QuartIn).unwrap();
        assert!(approx_eq(t, 0.0625)); // 0.5^4
    }

    // ==================== LERP TESTS ====================

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.0), 10.0));
    }

    #[test]
    fn test_lerp_f32_negative_values() {
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.5), 0.0));
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
    }

    #[test]
    fn test_lerp_f32_extrapolation() {
        // Overshooting easings hand us t outside [0,1]; lerp must follow.
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.1), 11.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, -0.1), -1.0));
    }
}
