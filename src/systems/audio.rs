//! Audio command queue maintenance.
//!
//! The stage never plays sound itself; systems write
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages when an element's
//! sound cue fires, and the host drains them each tick. This module only
//! carries the queue's per-tick upkeep.

use bevy_ecs::prelude::Messages;
use bevy_ecs::system::ResMut;

use crate::events::audio::AudioCmd;

/// Advance the ECS message queue for [`AudioCmd`].
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame so
/// written messages age out of the double buffer; a host that skips a drain
/// loses commands after two ticks instead of growing the queue forever.
pub fn update_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}
