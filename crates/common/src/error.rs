//! Common error types and handling for AdMock Studio

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type shared by the workflow, its stage services and the exporter
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An operation was invoked before a stage it depends on
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// A required storyboard version or frame does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the stable error code reported to drivers
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Precondition(_) => "PRECONDITION_FAILED",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can fix this by driving the workflow differently
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::Precondition(_) | Error::NotFound(_) | Error::Validation(_)
        )
    }
}
