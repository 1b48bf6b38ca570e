//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the scaled clock while
//! the real clock tracks the raw delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The scaled
/// clock drives animation by default; the real clock keeps running at wall
/// rate for tweens flagged to ignore the stage's time scale.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * time.time_scale;
    time.elapsed += scaled_dt;
    time.delta = scaled_dt;
    time.real_elapsed += dt;
    time.real_delta = dt;
}
