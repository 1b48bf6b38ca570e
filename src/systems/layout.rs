//! Anchored-layout resolution for the element tree.
//!
//! Two systems cooperate here:
//!
//! - [`flag_layout_changes`] marks anchor descriptors dirty when something
//!   they depend on moved underneath them: a scale change (the effective
//!   size feeds the anchor math) or a screen resize (the parent box of
//!   every unparented element).
//! - [`resolve_layout`] turns every dirty [`Anchor`] into an absolute
//!   top-left [`ScreenPosition`] and a matching [`TouchArea`] rect, then
//!   clears the dirty flag. A clean tree makes this a no-op scan.
//!
//! Resolution walks parents before children: an element whose parent is
//! still dirty waits for the next pass, so a chain of depth N settles in N
//! passes of a single call. Anchor mutators only ever mark the edited
//! element dirty; descendants keep their cached position until their own
//! descriptor changes, which matches how hosts reposition whole panels
//! (move the panel, children ride along via the panel's resolved box on
//! their next refresh).
//!
//! # Schedule position
//!
//! Runs after the tween systems (position and scale tweens mark anchors
//! dirty) and before pointer dispatch, so hit testing always sees this
//! tick's geometry.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::anchor::{
    Anchor, Precision, XAnchor, YAnchor, x_anchor_adjustment, x_percent_from,
    y_anchor_adjustment, y_percent_from,
};
use crate::components::framerect::FrameRect;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::toucharea::TouchArea;
use crate::resources::screensize::ScreenSize;

/// The box an element is anchored against: either its parent element's
/// resolved rect or the screen itself.
#[derive(Debug, Clone, Copy)]
struct ParentBox {
    pos: Vec2,
    w: f32,
    h: f32,
    origin_x: XAnchor,
    origin_y: YAnchor,
}

impl ParentBox {
    fn screen(screen: &ScreenSize) -> Self {
        Self {
            pos: Vec2::ZERO,
            w: screen.w as f32,
            h: screen.h as f32,
            origin_x: XAnchor::Left,
            origin_y: YAnchor::Top,
        }
    }
}

/// Mark anchors dirty for elements whose scale changed this tick, or all
/// anchors when the screen size was replaced.
pub fn flag_layout_changes(
    screen: Res<ScreenSize>,
    mut query: Query<(&mut Anchor, Ref<Scale>)>,
) {
    let screen_changed = screen.is_changed();
    for (mut anchor, scale) in query.iter_mut() {
        if screen_changed || scale.is_changed() {
            anchor.dirty = true;
        }
    }
}

/// Resolve every dirty anchor into screen coordinates.
///
/// Each pass picks up the dirty elements whose parent (if any) is already
/// clean, writes their [`ScreenPosition`] and [`TouchArea`] rect, and
/// clears their flag; elements blocked on a dirty parent are retried in
/// the next pass. `UiStage::set_parent` rejects cycles before they reach
/// the world, so a blocked element always unblocks; the empty-pass check
/// is the loop exit either way.
pub fn resolve_layout(world: &mut World) {
    let screen = *world.resource::<ScreenSize>();
    let mut elements = world.query::<(Entity, &Anchor)>();

    loop {
        let mut ready: Vec<(Entity, ParentBox)> = Vec::new();
        let mut blocked = false;

        for (entity, anchor) in elements.iter(world) {
            if !anchor.dirty {
                continue;
            }
            let Some(parent) = anchor.parent else {
                ready.push((entity, ParentBox::screen(&screen)));
                continue;
            };
            match world.get::<Anchor>(parent) {
                Some(parent_anchor) if parent_anchor.dirty => {
                    blocked = true;
                }
                Some(parent_anchor) => {
                    let pos = world
                        .get::<ScreenPosition>(parent)
                        .map(|p| p.pos)
                        .unwrap_or(Vec2::ZERO);
                    let rect = world
                        .get::<TouchArea>(parent)
                        .map(|t| t.rect)
                        .unwrap_or_default();
                    ready.push((
                        entity,
                        ParentBox {
                            pos,
                            w: rect.w,
                            h: rect.h,
                            origin_x: parent_anchor.origin_x,
                            origin_y: parent_anchor.origin_y,
                        },
                    ));
                }
                // Parent despawned out from under the element; anchor
                // against the screen rather than stalling forever.
                None => ready.push((entity, ParentBox::screen(&screen))),
            }
        }

        if ready.is_empty() {
            break;
        }
        for (entity, parent_box) in ready {
            resolve_one(world, entity, &parent_box);
        }
        if !blocked {
            break;
        }
    }
}

/// Compute and store one element's absolute position and touch rect.
fn resolve_one(world: &mut World, entity: Entity, parent: &ParentBox) {
    let Some(anchor) = world.get::<Anchor>(entity).copied() else {
        return;
    };
    let (natural_w, natural_h) = match world.get::<Sprite>(entity) {
        Some(sprite) => (sprite.width, sprite.height),
        None => (0.0, 0.0),
    };
    let scale = world.get::<Scale>(entity).copied().unwrap_or_default();
    let eff_w = natural_w * scale.x;
    let eff_h = natural_h * scale.y;

    // Start from the anchored point on the parent box.
    let mut pos = parent.pos;
    pos.x += x_anchor_adjustment(anchor.parent_x, parent.w, parent.origin_x);
    pos.y -= y_anchor_adjustment(anchor.parent_y, parent.h, parent.origin_y);

    // Apply the offset between the two anchor points.
    match anchor.precision {
        Precision::Percentage => {
            pos.x += x_percent_from(anchor.self_x, parent.w, anchor.offset.x);
            pos.y += y_percent_from(anchor.self_y, parent.h, anchor.offset.y);
        }
        Precision::Pixel => {
            pos.x += if anchor.self_x == XAnchor::Right {
                -anchor.offset.x
            } else {
                anchor.offset.x
            };
            pos.y += if anchor.self_y == YAnchor::Bottom {
                -anchor.offset.y
            } else {
                anchor.offset.y
            };
        }
    }

    // Shift from the element's own anchor point to its top-left corner,
    // using the effective (scaled) size.
    pos.x -= x_anchor_adjustment(anchor.self_x, eff_w, anchor.origin_x);
    pos.y += y_anchor_adjustment(anchor.self_y, eff_h, anchor.origin_y);

    if let Some(mut screen_pos) = world.get_mut::<ScreenPosition>(entity) {
        screen_pos.pos = pos;
    }
    if let Some(mut touch) = world.get_mut::<TouchArea>(entity) {
        touch.rect = FrameRect::new(pos.x, pos.y, eff_w, eff_h);
    }
    if let Some(mut anchor) = world.get_mut::<Anchor>(entity) {
        anchor.dirty = false;
    }
}
