/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No survey is stored under the given id.
    #[error("no survey with id {id:?}")]
    NotFound { id: String },

    /// The survey already has responses; its questions can no longer be
    /// edited without corrupting the index-keyed answers.
    #[error("survey {id:?} already has responses and can no longer be edited")]
    Locked { id: String },

    /// Backend-specific failure (connection loss, corrupt document, etc.)
    #[error("storage backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error means the survey does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
