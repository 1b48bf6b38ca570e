use bevy_ecs::prelude::Component;

use crate::components::framerect::FrameRect;

/// Sprite is identified by a texture key, its natural (unscaled) size and
/// the active source rectangle within that texture.
/// The frame is rewritten by the frame-animation system when the element
/// steps through a sprite-sheet sequence; a renderer samples the texture
/// at `frame` and draws at the resolved screen position.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    /// Natural width in pixels, fixed at spawn from frame metadata.
    pub width: f32,
    /// Natural height in pixels, fixed at spawn from frame metadata.
    pub height: f32,
    /// Active source rect; the zero rect means "draw the whole texture".
    pub frame: FrameRect,
    pub visible: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            frame: FrameRect::zero(),
            visible: true,
        }
    }

    pub fn with_frame(mut self, frame: FrameRect) -> Self {
        self.frame = frame;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let s = Sprite::new("menu/button", 64.0, 32.0);
        assert_eq!(s.tex_key, "menu/button");
        assert_eq!(s.width, 64.0);
        assert_eq!(s.height, 32.0);
        assert!(s.visible);
        assert!(s.frame.is_zero());
    }

    #[test]
    fn test_with_frame() {
        let s = Sprite::new("hud", 10.0, 10.0).with_frame(FrameRect::new(1.0, 2.0, 3.0, 4.0));
        assert!(s.frame.is_valid());
        assert_eq!(s.frame.w, 3.0);
    }
}
