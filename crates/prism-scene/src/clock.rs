//! Wall-clock step throttle.

use serde::{Deserialize, Serialize};

/// Accumulates caller-reported wall time and fires once it exceeds the interval.
///
/// Decouples how often the caller ticks from how often the scene steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepClock {
    interval: f32,
    accumulated: f32,
}

impl StepClock {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Adds `wall_elapsed`. Returns the accumulated time and resets when it
    /// strictly exceeds the interval.
    pub fn accumulate(&mut self, wall_elapsed: f32) -> Option<f32> {
        self.accumulated += wall_elapsed;
        if self.accumulated > self.interval {
            let elapsed = self.accumulated;
            self.accumulated = 0.0;
            Some(elapsed)
        } else {
            None
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Time accumulated since the clock last fired.
    pub fn pending(&self) -> f32 {
        self.accumulated
    }
}
