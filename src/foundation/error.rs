/// Convenience result type used across yeardots.
pub type DotsResult<T> = Result<T, DotsError>;

/// Top-level error taxonomy used by rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum DotsError {
    /// Invalid configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The drawing surface could not be created for the requested dimensions.
    #[error("surface error: {0}")]
    Surface(String),

    /// Font bytes could not be registered with the font store.
    #[error("font error: {0}")]
    Font(String),

    /// The finished surface could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DotsError {
    /// Build a [`DotsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DotsError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`DotsError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`DotsError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
