use bevy_ecs::prelude::Component;

/// Sound effect ids fired at interaction and tween milestones.
///
/// Each cue is optional; set ones are emitted as
/// [`AudioCmd::PlayFx`](crate::events::audio::AudioCmd) messages for the host
/// to route to its mixer.
#[derive(Debug, Clone, Component, Default)]
pub struct SoundCues {
    /// Played when a press owned by this element is released, wherever the
    /// pointer ends up.
    pub touch_up: Option<String>,
    /// Played when any tween on this element starts.
    pub easing_start: Option<String>,
    /// Played when any tween on this element completes naturally.
    pub easing_complete: Option<String>,
}

impl SoundCues {
    pub fn with_touch_up(mut self, id: impl Into<String>) -> Self {
        self.touch_up = Some(id.into());
        self
    }

    pub fn with_easing_start(mut self, id: impl Into<String>) -> Self {
        self.easing_start = Some(id.into());
        self
    }

    pub fn with_easing_complete(mut self, id: impl Into<String>) -> Self {
        self.easing_complete = Some(id.into());
        self
    }
}
