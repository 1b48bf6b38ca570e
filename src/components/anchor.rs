//! Anchored-layout descriptor and the percentage/anchor conversion math.
//!
//! An element's position is never stored as absolute coordinates. It is
//! derived from an [`Anchor`]: which edge/center of the parent box the
//! element hangs from, which edge/center of its own box lines up there, and
//! a percentage (or pixel) offset between the two. The layout resolver
//! turns this into an absolute top-left each tick when the descriptor is
//! dirty.
//!
//! The free functions are the pure conversion layer:
//! - [`x_percent_from`] / [`y_percent_from`]: percent offset to pixels,
//!   flipped for right/bottom anchors so percentages grow into the parent.
//! - [`x_percent_to`] / [`y_percent_to`]: the inverse, guarding zero sizes.
//! - [`x_anchor_adjustment`] / [`y_anchor_adjustment`]: pixel correction
//!   converting a position expressed against one anchor into another.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

/// Horizontal anchor reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAnchor {
    #[default]
    Left,
    Right,
    Center,
}

/// Vertical anchor reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAnchor {
    #[default]
    Top,
    Bottom,
    Center,
}

/// How [`Anchor`] offsets are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Offsets are fractions of the parent box (0.25 = a quarter of it).
    #[default]
    Percentage,
    /// Offsets are raw pixels.
    Pixel,
}

/// Percent-of-width to pixel offset. Right-anchored percentages grow
/// leftward into the parent, so the sign flips.
pub fn x_percent_from(anchor: XAnchor, width: f32, percent: f32) -> f32 {
    let offset = width * percent;
    if anchor == XAnchor::Right { -offset } else { offset }
}

/// Percent-of-height to pixel offset, bottom flipping the sign.
pub fn y_percent_from(anchor: YAnchor, height: f32, percent: f32) -> f32 {
    let offset = height * percent;
    if anchor == YAnchor::Bottom { -offset } else { offset }
}

/// Pixel offset back to a percentage. Zero width yields zero rather than a
/// division error.
pub fn x_percent_to(anchor: XAnchor, width: f32, offset: f32) -> f32 {
    if width == 0.0 {
        return 0.0;
    }
    let percent = offset / width;
    if anchor == XAnchor::Right { -percent } else { percent }
}

/// Pixel offset back to a percentage, guarding zero height.
pub fn y_percent_to(anchor: YAnchor, height: f32, offset: f32) -> f32 {
    if height == 0.0 {
        return 0.0;
    }
    let percent = offset / height;
    if anchor == YAnchor::Bottom { -percent } else { percent }
}

/// Pixel correction converting a position expressed relative to
/// `origin` into one relative to `anchor`. Identity when they match.
pub fn x_anchor_adjustment(anchor: XAnchor, width: f32, origin: XAnchor) -> f32 {
    match (anchor, origin) {
        (XAnchor::Left, XAnchor::Center) => -width / 2.0,
        (XAnchor::Left, XAnchor::Right) => -width,
        (XAnchor::Right, XAnchor::Left) => width,
        (XAnchor::Right, XAnchor::Center) => width / 2.0,
        (XAnchor::Center, XAnchor::Left) => width / 2.0,
        (XAnchor::Center, XAnchor::Right) => -width / 2.0,
        _ => 0.0,
    }
}

/// Vertical counterpart of [`x_anchor_adjustment`]. The table is not a
/// mirror of the horizontal one; the signs follow screen-space Y.
pub fn y_anchor_adjustment(anchor: YAnchor, height: f32, origin: YAnchor) -> f32 {
    match (anchor, origin) {
        (YAnchor::Top, YAnchor::Center) => -height / 2.0,
        (YAnchor::Top, YAnchor::Bottom) => -height,
        (YAnchor::Bottom, YAnchor::Top) => -height,
        (YAnchor::Bottom, YAnchor::Center) => height / 2.0,
        (YAnchor::Center, YAnchor::Top) => -height / 2.0,
        (YAnchor::Center, YAnchor::Bottom) => height / 2.0,
        _ => 0.0,
    }
}

/// Anchored-layout descriptor component.
///
/// `dirty` marks the cached resolved position stale; the layout resolver
/// clears it. Every mutator here sets it. Reparenting goes through
/// [`UiStage::set_parent`](crate::stage::UiStage::set_parent), which
/// rejects cycles before touching `parent`.
#[derive(Debug, Clone, Copy, Component)]
pub struct Anchor {
    /// At most one parent element; `None` anchors against the screen box.
    pub parent: Option<Entity>,
    pub parent_x: XAnchor,
    pub parent_y: YAnchor,
    pub self_x: XAnchor,
    pub self_y: YAnchor,
    /// How the element's own previous anchor was interpreted; used to
    /// convert between anchor bases without re-deriving from raw position.
    pub origin_x: XAnchor,
    pub origin_y: YAnchor,
    pub precision: Precision,
    /// Offset relative to the anchor, never an absolute coordinate.
    pub offset: Vec2,
    pub dirty: bool,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            parent: None,
            parent_x: XAnchor::Left,
            parent_y: YAnchor::Top,
            self_x: XAnchor::Left,
            self_y: YAnchor::Top,
            origin_x: XAnchor::Left,
            origin_y: YAnchor::Top,
            precision: Precision::Percentage,
            offset: Vec2::ZERO,
            dirty: true,
        }
    }
}

impl Anchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// General form behind the `position_from_*` presets: pin `self_(x,y)`
    /// of this element to `parent_(x,y)` of the parent box, offset by
    /// percentages of the parent size.
    pub fn position_from(
        &mut self,
        parent_x: XAnchor,
        parent_y: YAnchor,
        self_x: XAnchor,
        self_y: YAnchor,
        offset_x: f32,
        offset_y: f32,
    ) {
        self.parent_x = parent_x;
        self.parent_y = parent_y;
        self.self_x = self_x;
        self.self_y = self_y;
        self.offset = Vec2::new(offset_x, offset_y);
        self.precision = Precision::Percentage;
        self.dirty = true;
    }

    pub fn position_from_center(&mut self, from_top: f32, from_left: f32) {
        self.position_from(
            XAnchor::Center,
            YAnchor::Center,
            XAnchor::Center,
            YAnchor::Center,
            from_left,
            from_top,
        );
    }

    pub fn position_from_top_left(&mut self, from_top: f32, from_left: f32) {
        self.position_from(
            XAnchor::Left,
            YAnchor::Top,
            XAnchor::Left,
            YAnchor::Top,
            from_left,
            from_top,
        );
    }

    pub fn position_from_top_right(&mut self, from_top: f32, from_right: f32) {
        self.position_from(
            XAnchor::Right,
            YAnchor::Top,
            XAnchor::Right,
            YAnchor::Top,
            from_right,
            from_top,
        );
    }

    pub fn position_from_bottom_left(&mut self, from_bottom: f32, from_left: f32) {
        self.position_from(
            XAnchor::Left,
            YAnchor::Bottom,
            XAnchor::Left,
            YAnchor::Bottom,
            from_left,
            from_bottom,
        );
    }

    pub fn position_from_bottom_right(&mut self, from_bottom: f32, from_right: f32) {
        self.position_from(
            XAnchor::Right,
            YAnchor::Bottom,
            XAnchor::Right,
            YAnchor::Bottom,
            from_right,
            from_bottom,
        );
    }

    /// Hang from the vertical center of the parent's left edge.
    pub fn position_from_left(&mut self, from_top: f32, from_left: f32) {
        self.position_from(
            XAnchor::Left,
            YAnchor::Center,
            XAnchor::Left,
            YAnchor::Center,
            from_left,
            from_top,
        );
    }

    /// Hang from the horizontal center of the parent's top edge.
    pub fn position_from_top(&mut self, from_top: f32, from_left: f32) {
        self.position_from(
            XAnchor::Center,
            YAnchor::Top,
            XAnchor::Center,
            YAnchor::Top,
            from_left,
            from_top,
        );
    }

    pub fn position_from_bottom(&mut self, from_bottom: f32, from_left: f32) {
        self.position_from(
            XAnchor::Center,
            YAnchor::Bottom,
            XAnchor::Center,
            YAnchor::Bottom,
            from_left,
            from_bottom,
        );
    }

    pub fn position_from_right(&mut self, from_top: f32, from_right: f32) {
        self.position_from(
            XAnchor::Right,
            YAnchor::Center,
            XAnchor::Right,
            YAnchor::Center,
            from_right,
            from_top,
        );
    }

    /// Override the element-side anchors without touching the offsets.
    pub fn set_self_anchors(&mut self, self_x: XAnchor, self_y: YAnchor) {
        self.self_x = self_x;
        self.self_y = self_y;
        self.dirty = true;
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.dirty = true;
    }

    /// Switch to raw pixel offsets.
    pub fn set_pixel_offset(&mut self, offset: Vec2) {
        self.precision = Precision::Pixel;
        self.offset = offset;
        self.dirty = true;
    }
}
