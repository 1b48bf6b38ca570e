//! Frame-sequence animation state.
//!
//! [`FrameAnim`] steps an element through its sprite-sheet frames:
//! - [`PlayMode::Loop`] wraps silently and runs forever.
//! - [`PlayMode::Once`] stops and resets to the first frame after one full
//!   cycle.
//! - [`PlayMode::PingPong`] reverses at the last frame and stops once it
//!   is back at the first.
//! - [`PlayMode::None`] marks a static image that never animates.
//!
//! The stepping itself lives in
//! [`update_frame_animations`](crate::systems::frameanim::update_frame_animations);
//! this component is the data plus play/stop controls.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::components::framerect::FrameRect;

/// Default playback rate in frames per second.
pub const DEFAULT_FPS: f32 = 24.0;

/// Frame-sequence playback policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    /// Static image; stepping is a no-op.
    #[default]
    None,
    Loop,
    Once,
    PingPong,
}

/// Frame-sequence animation state machine.
#[derive(Component, Clone, Debug)]
pub struct FrameAnim {
    /// Source rects in play order. Most UI sprites carry only a handful.
    pub frames: SmallVec<[FrameRect; 8]>,
    pub first: usize,
    pub last: usize,
    pub current: usize,
    pub fps: f32,
    /// Accumulates `fps * dt`; a step fires when it exceeds 1.
    pub timer: f32,
    pub mode: PlayMode,
    pub rewinding: bool,
    pub playing: bool,
}

impl FrameAnim {
    /// Build from a frame list spanning the whole range. Starts stopped;
    /// call [`play`](Self::play) or [`play_backward`](Self::play_backward).
    pub fn new(frames: SmallVec<[FrameRect; 8]>, mode: PlayMode) -> Self {
        let last = frames.len().saturating_sub(1);
        Self {
            frames,
            first: 0,
            last,
            current: 0,
            fps: DEFAULT_FPS,
            timer: 0.0,
            mode,
            rewinding: false,
            playing: false,
        }
    }

    /// A static, frameless element (standalone texture).
    pub fn static_image() -> Self {
        Self::new(SmallVec::new(), PlayMode::None)
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Restrict playback to `first..=last`, clamped to the frame list, and
    /// rewind to the range start.
    pub fn with_range(mut self, first: usize, last: usize) -> Self {
        self.first = first;
        self.last = last.min(self.frames.len().saturating_sub(1));
        self.current = self.first;
        self
    }

    /// Resume stepping from the current frame.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Play the sequence in reverse, starting from the last frame.
    pub fn play_backward(&mut self) {
        self.rewinding = true;
        self.playing = true;
        self.current = self.last;
    }

    /// Halt and reset to the first frame, facing forward.
    pub fn stop(&mut self) {
        self.playing = false;
        self.rewinding = false;
        self.current = self.first;
    }

    /// Jump to a frame; out-of-range requests are ignored.
    pub fn set_frame(&mut self, index: usize) {
        if index >= self.frames.len() {
            return;
        }
        self.current = index;
    }

    /// Source rect of the current frame, or the zero sentinel when the
    /// element carries no frames.
    pub fn current_rect(&self) -> FrameRect {
        self.frames
            .get(self.current)
            .copied()
            .unwrap_or_else(FrameRect::zero)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn four_frames() -> SmallVec<[FrameRect; 8]> {
        smallvec![
            FrameRect::new(0.0, 0.0, 16.0, 16.0),
            FrameRect::new(16.0, 0.0, 16.0, 16.0),
            FrameRect::new(32.0, 0.0, 16.0, 16.0),
            FrameRect::new(48.0, 0.0, 16.0, 16.0),
        ]
    }

    #[test]
    fn test_new_spans_whole_range_stopped() {
        let anim = FrameAnim::new(four_frames(), PlayMode::Loop);
        assert_eq!(anim.first, 0);
        assert_eq!(anim.last, 3);
        assert_eq!(anim.current, 0);
        assert_eq!(anim.fps, DEFAULT_FPS);
        assert!(!anim.playing);
    }

    #[test]
    fn test_play_resumes_in_place() {
        let mut anim = FrameAnim::new(four_frames(), PlayMode::Loop);
        anim.current = 2;
        anim.play();
        assert!(anim.playing);
        assert_eq!(anim.current, 2);
    }

    #[test]
    fn test_static_image_never_plays() {
        let anim = FrameAnim::static_image();
        assert_eq!(anim.mode, PlayMode::None);
        assert!(!anim.playing);
        assert_eq!(anim.frame_count(), 0);
        assert!(anim.current_rect().is_zero());
    }

    #[test]
    fn test_play_backward_starts_at_last() {
        let mut anim = FrameAnim::new(four_frames(), PlayMode::Once);
        anim.play_backward();
        assert!(anim.rewinding);
        assert!(anim.playing);
        assert_eq!(anim.current, 3);
    }

    #[test]
    fn test_stop_resets() {
        let mut anim = FrameAnim::new(four_frames(), PlayMode::Loop);
        anim.current = 2;
        anim.rewinding = true;
        anim.stop();
        assert!(!anim.playing);
        assert!(!anim.rewinding);
        assert_eq!(anim.current, 0);
    }

    #[test]
    fn test_set_frame_ignores_out_of_range() {
        let mut anim = FrameAnim::new(four_frames(), PlayMode::Loop);
        anim.set_frame(2);
        assert_eq!(anim.current, 2);
        anim.set_frame(99);
        assert_eq!(anim.current, 2);
    }

    #[test]
    fn test_with_range_clamps_and_rewinds_current() {
        let anim = FrameAnim::new(four_frames(), PlayMode::Loop).with_range(1, 9);
        assert_eq!(anim.first, 1);
        assert_eq!(anim.last, 3);
        assert_eq!(anim.current, 1);
    }

    #[test]
    fn test_current_rect() {
        let mut anim = FrameAnim::new(four_frames(), PlayMode::Loop);
        anim.set_frame(1);
        assert_eq!(anim.current_rect().x, 16.0);
    }
}
