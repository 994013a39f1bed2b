use std::time::Instant;

use crate::animation::state::FRAME_INTERVAL_MS;

/// Source of the per-tick time step fed to animation states.
#[derive(Clone, Copy, Debug)]
pub enum FrameClock {
    /// Constant step, regardless of how often the driver actually calls in.
    Fixed { interval_ms: f32 },
    /// Wall-clock time since the previous tick. The first tick uses the nominal 60 Hz step.
    Measured { last: Option<Instant> },
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::Fixed {
            interval_ms: FRAME_INTERVAL_MS,
        }
    }
}

impl FrameClock {
    pub fn fixed(interval_ms: f32) -> Self {
        Self::Fixed { interval_ms }
    }

    pub fn measured() -> Self {
        Self::Measured { last: None }
    }

    pub fn next_delta_ms(&mut self) -> f32 {
        match self {
            Self::Fixed { interval_ms } => *interval_ms,
            Self::Measured { last } => {
                let now = Instant::now();
                let delta = last
                    .map(|prev| now.duration_since(prev).as_secs_f32() * 1000.0)
                    .unwrap_or(FRAME_INTERVAL_MS);
                *last = Some(now);
                delta
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/clock.rs"]
mod tests;
