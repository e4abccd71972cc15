//! Engine error taxonomy
//!
//! Every failure the engine layer surfaces carries one of these kinds so
//! callers can pick their own recovery policy; nothing here retries.

use std::io;

/// Result alias used across the engine layer
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The capability does not exist in the active build variant.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// No encoding is known under the requested name.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The registry was read before any engine was activated.
    #[error("Engine not initialized: activate an engine before first use")]
    EngineNotInitialized,

    /// A second activation was attempted; carries the active engine's name.
    #[error("Engine already initialized with `{0}`")]
    EngineAlreadyInitialized(&'static str),

    /// An underlying file, stream or network failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An invalid argument was passed across an API boundary.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedOperation(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The wrapped I/O failure, if this is an I/O error
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }

    /// Whether a caller may reasonably retry or fall back.
    ///
    /// I/O failures can be transient and an unknown encoding can fall back to
    /// the default charset. Everything else is a build or caller defect.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::UnsupportedEncoding(_))
    }
}

impl From<EngineError> for io::Error {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Io(inner) => inner,
            EngineError::UnsupportedOperation(_) => io::Error::new(io::ErrorKind::Unsupported, err),
            EngineError::Validation(_) => io::Error::new(io::ErrorKind::InvalidInput, err),
            other => io::Error::other(other),
        }
    }
}
