//! Error types and exit codes for hoppath
//!
//! Exit codes:
//! - 0: Success (including searches that find no path)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph or config file)
//!
//! The path finder itself never fails; these errors cover everything around it.

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unparseable graph or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during hoppath operations
#[derive(Error, Debug)]
pub enum HoppathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl HoppathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        HoppathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        HoppathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            HoppathError::UnknownFormat(_)
            | HoppathError::DuplicateFormat
            | HoppathError::UsageError(_)
            | HoppathError::Unsupported { .. } => ExitCode::Usage,

            HoppathError::Yaml(_) | HoppathError::Json(_) | HoppathError::Toml(_) => {
                ExitCode::Data
            }

            HoppathError::FailedOperationWithTarget { .. } | HoppathError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            HoppathError::UnknownFormat(_) => "unknown_format",
            HoppathError::DuplicateFormat => "duplicate_format",
            HoppathError::UsageError(_) => "usage_error",
            HoppathError::Unsupported { .. } => "unsupported",
            HoppathError::Yaml(_) => "yaml_error",
            HoppathError::Json(_) => "json_error",
            HoppathError::Toml(_) => "toml_error",
            HoppathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            HoppathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for hoppath operations
pub type Result<T> = std::result::Result<T, HoppathError>;
