//! Frame-sequence stepping system.
//!
//! Advances every playing [`FrameAnim`](crate::components::frameanim::FrameAnim)
//! and writes the current source rect into the element's
//! [`Sprite`](crate::components::sprite::Sprite). Stepping accrues
//! `fps * delta` into the frame timer and fires at most one step per tick
//! when the timer crosses 1, so a stall does not fast-forward the sequence.

use bevy_ecs::prelude::*;

use crate::components::frameanim::{FrameAnim, PlayMode};
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Step playing frame animations and update sprite frames.
///
/// Elements that are invisible, frameless, single-frame, or in
/// [`PlayMode::None`] are left untouched. On wrap, `Once` stops after a
/// full cycle; `PingPong` reverses at the last frame and stops once it is
/// back at the first. The stopping step does not rewrite the sprite frame,
/// so a completed `Once` run keeps showing its final frame while the
/// animation state rests on the first.
pub fn update_frame_animations(
    time: Res<WorldTime>,
    mut query: Query<(&mut FrameAnim, &mut Sprite)>,
) {
    let dt = time.delta;
    for (mut anim, mut sprite) in query.iter_mut() {
        if !sprite.visible || !anim.playing {
            continue;
        }
        if anim.frames.len() <= 1 || anim.mode == PlayMode::None {
            continue;
        }

        anim.timer += anim.fps * dt;
        if anim.timer <= 1.0 {
            continue;
        }

        let mut frame = anim.current as isize + if anim.rewinding { -1 } else { 1 };
        anim.timer = 0.0;

        // Wrap both ends of the play range.
        if frame > anim.last as isize {
            frame = anim.first as isize;
        }
        if frame < anim.first as isize {
            frame = anim.last as isize;
        }
        anim.current = frame as usize;

        match anim.mode {
            PlayMode::Once => {
                if anim.current == anim.first {
                    anim.stop();
                    continue;
                }
            }
            PlayMode::PingPong => {
                if anim.current == anim.last {
                    anim.rewinding = !anim.rewinding;
                } else if anim.current == anim.first {
                    anim.stop();
                    continue;
                }
            }
            _ => {}
        }

        sprite.frame = anim.current_rect();
    }
}
