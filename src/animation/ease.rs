/// Easing curve applied to an animation state's progress.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    /// `x²`
    In,
    /// `-x² + 2x`
    Out,
    /// `2x²` up to the midpoint, then `-2x² + 4x - 1`.
    InOut,
    /// Caller-provided curve. Not representable in scene descriptions.
    #[serde(skip)]
    Custom(fn(f32) -> f32),
}

impl Ease {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::In => ease_in(x),
            Self::Out => ease_out(x),
            Self::InOut => ease_in_out(x),
            Self::Custom(f) => f(x),
        }
    }
}

pub fn ease_in(x: f32) -> f32 {
    x * x
}

pub fn ease_out(x: f32) -> f32 {
    -(x * x) + 2.0 * x
}

pub fn ease_in_out(x: f32) -> f32 {
    if x <= 0.5 {
        2.0 * x * x
    } else {
        -2.0 * x * x + 4.0 * x - 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
