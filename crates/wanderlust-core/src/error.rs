//! Error types for Wanderlust core operations.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A token whose custom property is not defined by the host stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedToken {
    /// The token name, e.g. `brand`.
    pub token: String,
    /// The custom property it points at, without the `--` prefix.
    pub property: String,
}

impl fmt::Display for UnresolvedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> --{}", self.token, self.property)
    }
}

/// Errors that can occur in Wanderlust core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The style configuration is structurally invalid.
    #[error("Invalid style configuration: {0}")]
    InvalidConfig(String),

    /// A content glob could not be compiled.
    #[error("Invalid content pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending glob.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// One or more tokens reference custom properties the stylesheet never defines.
    #[error("Undefined custom properties: {}", format_unresolved(.0))]
    UnresolvedTokens(Vec<UnresolvedToken>),

    /// File system operation failed.
    #[error("File system error at {path}: {message}")]
    FileSystem {
        /// Path where the error occurred.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a file system error for `path`.
    pub fn file_system(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::FileSystem {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

fn format_unresolved(tokens: &[UnresolvedToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
