use thiserror::Error;

/// Unified error type for relcut operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Version not found: {0}")]
    VersionNotFound(String),

    #[error("Rewrite failed: {0}")]
    RewriteFailed(String),

    #[error("Unreleased section missing: {0}")]
    UnreleasedSectionMissing(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relcut
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a malformed-version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        ReleaseError::MalformedVersion(msg.into())
    }

    /// Create a version-not-found error with context
    pub fn version_not_found(msg: impl Into<String>) -> Self {
        ReleaseError::VersionNotFound(msg.into())
    }

    /// Create a rewrite-failed error with context
    pub fn rewrite_failed(msg: impl Into<String>) -> Self {
        ReleaseError::RewriteFailed(msg.into())
    }

    /// Create an unreleased-section-missing error with context
    pub fn unreleased_missing(msg: impl Into<String>) -> Self {
        ReleaseError::UnreleasedSectionMissing(msg.into())
    }
}
