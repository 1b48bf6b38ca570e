use bevy_ecs::prelude::Resource;

/// Stage clocks. `elapsed` and `delta` advance scaled by `time_scale`;
/// `real_elapsed` and `real_delta` always advance at wall rate.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub real_elapsed: f32,
    pub delta: f32,
    pub real_delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            real_elapsed: 0.0,
            delta: 0.0,
            real_delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// The clock a tween reads, selected by its time-scale flag.
    pub fn clock(&self, affected_by_time_scale: bool) -> f32 {
        if affected_by_time_scale {
            self.elapsed
        } else {
            self.real_elapsed
        }
    }
}
