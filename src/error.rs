// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the verification library.

use std::fmt;

/// Result type alias for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Main error type for the verification library.
///
/// Failed verification is never an error; it degrades to a zero score in
/// the result. Errors are reserved for conditions that indicate a bug in a
/// collaborator: corrupt stored reference data, invalid configuration, or
/// unreadable pose-data input.
#[derive(Debug)]
pub enum VerifyError {
    /// A collaborator handed over structurally invalid data.
    ContractViolation(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Error parsing pose data.
    ParseError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractViolation(msg) => write!(f, "Contract violation: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VerifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
