//! Pointer dispatch: hit testing, press capture and touch events.
//!
//! [`dispatch_pointer`] runs once per tick after layout resolution. While
//! no element owns the press, a held pointer scans the visible touchable
//! elements near-to-far (ascending [`ZIndex`]) and the first rect
//! containing the pointer claims it: the element's `touched` flag goes up,
//! [`PointerCapture`] records it and a [`TouchDown`] fires. The scan keys
//! on the button being *down*, not on the press edge, so dragging onto an
//! element while holding claims it too.
//!
//! While an element owns the press, only the owner is polled. The capture
//! holds even when the pointer leaves the rect; releasing the button fires
//! [`TouchUp`] at the owner wherever the pointer is, plays its touch-up
//! sound cue and drops the capture. An owner that stops being touchable
//! mid-press (hidden, despawned) loses the capture without any event.
//! Either way the claim scan resumes on the next tick, never in the same
//! one the capture was dropped.

use bevy_ecs::prelude::*;

use crate::components::soundcues::SoundCues;
use crate::components::sprite::Sprite;
use crate::components::toucharea::TouchArea;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::touch::{TouchDown, TouchUp};
use crate::resources::pointer::{PointerCapture, PointerState};

/// Route the current pointer state to the element tree.
pub fn dispatch_pointer(
    pointer: Res<PointerState>,
    mut capture: ResMut<PointerCapture>,
    mut elements: Query<(Entity, &Sprite, &mut TouchArea, &ZIndex)>,
    cues: Query<&SoundCues>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    if let Some(owner) = capture.owner {
        match elements.get_mut(owner) {
            Err(_) => {
                // Owner despawned mid-press.
                capture.owner = None;
            }
            Ok((entity, sprite, mut touch, _)) => {
                if !sprite.visible || !touch.touchable {
                    // Hidden or disabled mid-press; drop the capture
                    // without a touch-up.
                    touch.touched = false;
                    capture.owner = None;
                } else if !pointer.pressed {
                    touch.touched = false;
                    capture.owner = None;
                    if let Ok(sound) = cues.get(entity)
                        && let Some(id) = &sound.touch_up
                    {
                        audio.write(AudioCmd::PlayFx {
                            id: id.clone(),
                            looped: false,
                        });
                    }
                    commands.trigger(TouchUp {
                        entity,
                        pos: pointer.pos,
                    });
                }
                // Still held: the capture rides out pointer movement.
            }
        }
        return;
    }

    if !pointer.pressed {
        return;
    }

    // Near-to-far scan; the first hit claims the press.
    let mut candidates: Vec<(ZIndex, Entity)> = Vec::new();
    for (entity, sprite, touch, z) in elements.iter() {
        if sprite.visible && touch.touchable && touch.rect.is_valid() {
            candidates.push((*z, entity));
        }
    }
    candidates.sort();

    for (_, entity) in candidates {
        let Ok((_, _, mut touch, _)) = elements.get_mut(entity) else {
            continue;
        };
        if !touch.hit(pointer.pos) {
            continue;
        }
        touch.touched = true;
        capture.owner = Some(entity);
        commands.trigger(TouchDown {
            entity,
            pos: pointer.pos,
        });
        break;
    }
}
