//! Error types and exit codes for pathrace
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed graph, bad weight label, unknown node)

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
    /// Data error - malformed graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a graph or running an engine
#[derive(Error, Debug)]
pub enum PathraceError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    #[error("invalid weight label {label:?} on edge {edge_id}")]
    InvalidWeight { edge_id: String, label: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("extract from empty priority queue")]
    EmptyQueue,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathraceError {
    /// Create an error for a structurally invalid graph
    pub fn invalid_graph(reason: impl std::fmt::Display) -> Self {
        PathraceError::InvalidGraph {
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unparseable edge weight label
    pub fn invalid_weight(edge_id: &str, label: &str) -> Self {
        PathraceError::InvalidWeight {
            edge_id: edge_id.to_string(),
            label: label.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathraceError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PathraceError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathraceError::UnknownFormat(_)
            | PathraceError::UsageError(_)
            | PathraceError::InvalidValue { .. } => ExitCode::Usage,

            PathraceError::InvalidGraph { .. }
            | PathraceError::InvalidWeight { .. }
            | PathraceError::NotFound { .. } => ExitCode::Data,

            PathraceError::EmptyQueue
            | PathraceError::Io(_)
            | PathraceError::Json(_)
            | PathraceError::Toml(_)
            | PathraceError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathraceError::UnknownFormat(_) => "unknown_format",
            PathraceError::UsageError(_) => "usage_error",
            PathraceError::InvalidValue { .. } => "invalid_value",
            PathraceError::InvalidGraph { .. } => "invalid_graph",
            PathraceError::InvalidWeight { .. } => "invalid_weight",
            PathraceError::NotFound { .. } => "not_found",
            PathraceError::EmptyQueue => "empty_queue",
            PathraceError::Io(_) => "io_error",
            PathraceError::Json(_) => "json_error",
            PathraceError::Toml(_) => "toml_error",
            PathraceError::Other(_) => "other",
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

/// Result type alias for pathrace operations
pub type Result<T> = std::result::Result<T, PathraceError>;
