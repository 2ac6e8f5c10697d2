//! Application error types.
//!
//! The notation engine itself is total and never fails; errors only come
//! from the edges (parsing a single chord on request, configuration, I/O).

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// A label that does not satisfy the chord grammar
    #[error("Invalid chord {label:?}: {hint}")]
    InvalidChord {
        /// The offending label, verbatim.
        label: String,
        /// What the grammar expected.
        hint: &'static str,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an invalid chord error for the given label
    pub fn invalid_chord(label: impl Into<String>) -> Self {
        Self::InvalidChord {
            label: label.into(),
            hint: "expected a root A-H, optional # or b, optional quality, digits and /bass",
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
