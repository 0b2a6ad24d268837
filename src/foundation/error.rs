/// Convenience result type used across Framecast.
pub type FramecastResult<T> = Result<T, FramecastError>;

/// Top-level error taxonomy used by composition and submission APIs.
#[derive(thiserror::Error, Debug)]
pub enum FramecastError {
    /// One or more layer/option attributes were rejected. The mutation that
    /// produced this error did not take effect; every message in the list is
    /// a self-contained description of one rejected attribute.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The composition could not be flattened into an encode config
    /// (unsupported aspect ratio, malformed dimension string). Raised before
    /// any transport call is made.
    #[error("config error: {0}")]
    Config(String),

    /// Network or API failure reported by the transport collaborator.
    #[error("transport error: {0}")]
    Transport(String),

    /// Errors when serializing the encode config or deserializing responses.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramecastError {
    /// Build a [`FramecastError::Validation`] value from an error list.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    /// Build a [`FramecastError::Validation`] value carrying a single error.
    pub fn validation_one(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    /// Build a [`FramecastError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FramecastError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`FramecastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// The accumulated attribute errors, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
