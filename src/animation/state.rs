use crate::animation::ease::Ease;
use crate::foundation::error::{EmbuiError, EmbuiResult};

/// Nominal frame interval of a steady 60 Hz driver, in milliseconds.
pub const FRAME_INTERVAL_MS: f32 = 1000.0 / 60.0;

/// Index of an [`AnimationState`] in the slice registered with a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StateId(pub u32);

/// Time-integrated progress value with looping, reverse playback and easing.
///
/// `anim_value` is the raw progress in `[0, 1]`; `value` is what animator chains read and is
/// recomputed on every tick, running or not.
#[derive(Clone, Copy, Debug)]
pub struct AnimationState {
    duration: f32,
    /// 0 plays once. Nonzero is decremented on every wrap, so a value that never lands on zero
    /// (see [`AnimationState::LOOP_FOREVER`]) loops indefinitely.
    pub repeat_count: i32,
    pub running: bool,
    pub offset: f32,
    pub ease: Ease,
    anim_value: f32,
    value: f32,
}

impl AnimationState {
    pub const LOOP_FOREVER: i32 = -1;

    /// A stopped state. A negative `duration` plays in reverse and starts at progress 1.
    pub fn new(duration: f32) -> EmbuiResult<Self> {
        if !duration.is_finite() || duration == 0.0 {
            return Err(EmbuiError::animation(format!(
                "duration must be finite and non-zero, got {duration}"
            )));
        }
        let anim_value = if duration < 0.0 { 1.0 } else { 0.0 };
        let mut state = Self {
            duration,
            repeat_count: 0,
            running: false,
            offset: 0.0,
            ease: Ease::Linear,
            anim_value,
            value: 0.0,
        };
        state.refresh_value();
        Ok(state)
    }

    pub fn with_repeat(mut self, repeat_count: i32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self.refresh_value();
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self.refresh_value();
        self
    }

    pub fn running(mut self) -> Self {
        self.running = true;
        self
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn anim_value(&self) -> f32 {
        self.anim_value
    }

    /// Eased and offset output read by animator chains.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_reverse(&self) -> bool {
        self.duration < 0.0
    }

    /// Advance by `delta_ms` if running, then recompute `value`.
    pub fn tick(&mut self, delta_ms: f32) {
        if self.running {
            self.anim_value += delta_ms / self.duration;

            if self.repeat_count != 0 && self.anim_value > 1.0 {
                self.anim_value -= 1.0;
                self.repeat_count = self.repeat_count.saturating_sub(1);
            }
            if self.repeat_count != 0 && self.anim_value < 0.0 {
                self.anim_value += 1.0;
                self.repeat_count = self.repeat_count.saturating_sub(1);
            }
            if self.repeat_count == 0 && self.anim_value > 1.0 {
                self.anim_value = 1.0;
                self.running = false;
            }
            if self.repeat_count == 0 && self.anim_value < 0.0 {
                self.anim_value = 0.0;
                self.running = false;
            }
        }

        self.refresh_value();
    }

    fn refresh_value(&mut self) {
        let direction = if self.duration > 0.0 { 0.0 } else { 1.0 };
        self.value = self.ease.apply(self.anim_value) + self.offset - direction;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
