use thiserror::Error;

/// Unified error type for release-tools operations
#[derive(Error, Debug)]
pub enum ReleaseToolsError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Invalid pick status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Comment transport failed: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-tools
pub type Result<T> = std::result::Result<T, ReleaseToolsError>;

impl ReleaseToolsError {
    /// Create a malformed version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        ReleaseToolsError::MalformedVersion(msg.into())
    }

    /// Create an invalid status error with context
    pub fn invalid_status(msg: impl Into<String>) -> Self {
        ReleaseToolsError::InvalidStatus(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseToolsError::Config(msg.into())
    }

    /// Create a transport error with context
    pub fn transport(msg: impl Into<String>) -> Self {
        ReleaseToolsError::Transport(msg.into())
    }
}
