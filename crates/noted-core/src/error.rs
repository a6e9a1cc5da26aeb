//! Error types and exit codes for noted
//!
//! The derivations themselves are total and never fail. Errors come from the
//! layers around them: reading snapshots, loading configuration and parsing
//! command-line input.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unreadable snapshot, unknown note)

mod macros;

use thiserror::Error;

/// Exit codes for the noted binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad snapshot, unknown note (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around the derivation core
#[derive(Error, Debug)]
pub enum NotedError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("note not found: {id}")]
    NoteNotFound { id: i64 },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl NotedError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotedError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        NotedError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        NotedError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotedError::UsageError(_) | NotedError::InvalidValue { .. } => ExitCode::Usage,

            NotedError::NoteNotFound { .. }
            | NotedError::NotFound { .. }
            | NotedError::InvalidSnapshot { .. }
            | NotedError::Json(_) => ExitCode::Data,

            NotedError::Io(_)
            | NotedError::Toml(_)
            | NotedError::FailedOperation { .. }
            | NotedError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NotedError::UsageError(_) => "usage_error",
            NotedError::InvalidValue { .. } => "invalid_value",
            NotedError::NoteNotFound { .. } => "note_not_found",
            NotedError::NotFound { .. } => "not_found",
            NotedError::InvalidSnapshot { .. } => "invalid_snapshot",
            NotedError::Io(_) => "io_error",
            NotedError::Json(_) => "json_error",
            NotedError::Toml(_) => "toml_error",
            NotedError::FailedOperation { .. } => "failed_operation",
            NotedError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for noted operations
pub type Result<T> = std::result::Result<T, NotedError>;
