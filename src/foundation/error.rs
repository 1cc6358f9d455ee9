/// Result alias used at every fallible boundary of the crate.
pub type IconResult<T> = Result<T, IconError>;

/// Errors raised outside the pure frame-to-scene functions.
///
/// The render functions themselves are total; errors only come from validating host input,
/// registry files, rasterization and sinks.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Invalid configuration or host-provided value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene could not be rasterized.
    #[error("render error: {0}")]
    Render(String),

    /// Frame output could not be written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Registry (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`IconError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
