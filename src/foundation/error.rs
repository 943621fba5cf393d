/// Convenience alias for results carrying [`MosaikaError`].
pub type MosaikaResult<T> = Result<T, MosaikaError>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum MosaikaError {
    /// Invalid boundary input: config values, buffer shape, canvas size.
    #[error("validation error: {0}")]
    Validation(String),

    /// Session lifecycle misuse or internal loop failure.
    #[error("session error: {0}")]
    Session(String),

    /// Rasterization or surface export failure.
    #[error("render error: {0}")]
    Render(String),

    /// The source pixel buffer cannot back a session.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaikaError {
    /// Build a [`MosaikaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MosaikaError::Session`].
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Build a [`MosaikaError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MosaikaError::SourceUnavailable`].
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }
}
