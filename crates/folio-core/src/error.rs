//! Error handling for portfolio interaction components.

use thiserror::Error;

/// Convenient result alias for the interaction state machines.
pub type Result<T> = std::result::Result<T, FolioError>;

/// Errors raised by the interaction state machines.
///
/// None of these are user-facing: callers in the browser binding log them and
/// leave the affected feature idle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FolioError {
    /// A stat counter declared a target that is not a finite number.
    #[error("invalid counter target '{value}'")]
    InvalidCounterTarget {
        /// Raw attribute text.
        value: String,
    },
    /// The active panel holds no images.
    #[error("gallery is empty")]
    EmptyGallery,
    /// The activated photo is not part of the freshly discovered gallery.
    #[error("image is not part of the active gallery")]
    ImageNotInGallery,
    /// The typewriter was configured without any non-empty phrase.
    #[error("typewriter has no phrases")]
    NoPhrases,
    /// Site configuration could not be parsed.
    #[error("invalid configuration: {msg}")]
    InvalidConfig {
        /// Human-readable explanation of the failure.
        msg: String,
    },
}

impl From<String> for FolioError {
    fn from(s: String) -> Self {
        FolioError::InvalidConfig { msg: s }
    }
}

impl From<&str> for FolioError {
    fn from(s: &str) -> Self {
        FolioError::InvalidConfig { msg: s.to_string() }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::InvalidConfig {
            msg: err.to_string(),
        }
    }
}
