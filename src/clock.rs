//! Frame clock: host timestamps in, clamped step length out

use crate::consts::MAX_DT;

/// Turns monotonic millisecond timestamps into update steps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp, clamped to `[0, MAX_DT]`.
    /// The first call has nothing to measure against and returns 0.
    pub fn tick(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time = Some(time_ms);
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, MAX_DT)
    }

    /// Forget the last timestamp, e.g. after the host was suspended
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}
