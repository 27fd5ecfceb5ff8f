use thiserror::Error;

/// Unified error type for chronon-pack operations
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Requirements error: {0}")]
    Requirements(String),

    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in chronon-pack
pub type Result<T> = std::result::Result<T, PackError>;

impl PackError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PackError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        PackError::Version(msg.into())
    }

    /// Create a requirements error with context
    pub fn requirements(msg: impl Into<String>) -> Self {
        PackError::Requirements(msg.into())
    }

    /// Create a descriptor error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        PackError::Descriptor(msg.into())
    }
}
