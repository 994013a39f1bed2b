/// Convenience result type used across embui.
pub type EmbuiResult<T> = Result<T, EmbuiError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only recoverable conditions live here. An unsupported destination pixel format reaching the
/// rasterizer is a fatal fault and panics instead.
#[derive(thiserror::Error, Debug)]
pub enum EmbuiError {
    /// Invalid user-provided configuration or buffer.
    #[error("validation error: {0}")]
    Validation(String),

    /// Broken scene topology (unknown ids, cycles, bad splices).
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors while building or ticking animation state.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing scene descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmbuiError {
    /// Build a [`EmbuiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EmbuiError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`EmbuiError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`EmbuiError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
