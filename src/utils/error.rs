use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("No Python interpreter found on PATH (tried: {})", .candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    #[error("Runtime query via {program} failed with {status}: {stderr}")]
    RuntimeQueryFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Runtime query via {program} returned unusable output: {reason}")]
    InvalidRuntimeOutput { program: String, reason: String },

    #[error("Current working directory unavailable: {0}")]
    WorkingDirectoryUnavailable(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Runtime,
    Environment,
    Output,
    Configuration,
}

impl SmokeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmokeError::InterpreterNotFound { .. }
            | SmokeError::RuntimeQueryFailed { .. }
            | SmokeError::InvalidRuntimeOutput { .. } => ErrorCategory::Runtime,
            SmokeError::WorkingDirectoryUnavailable(_) => ErrorCategory::Environment,
            SmokeError::IoError(_) => ErrorCategory::Output,
            SmokeError::ConfigError { .. } | SmokeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code for this failure. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            SmokeError::InterpreterNotFound { .. } => 127,
            SmokeError::RuntimeQueryFailed { .. }
            | SmokeError::InvalidRuntimeOutput { .. }
            | SmokeError::WorkingDirectoryUnavailable(_) => 1,
            SmokeError::IoError(_) => 74,
            SmokeError::ConfigError { .. } | SmokeError::InvalidConfigValueError { .. } => 78,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SmokeError::InterpreterNotFound { .. } => {
                "Python is not installed in this container".to_string()
            }
            SmokeError::RuntimeQueryFailed { program, .. } => {
                format!("Python was found at {} but could not report its version", program)
            }
            SmokeError::InvalidRuntimeOutput { .. } => {
                "Python reported an empty version string".to_string()
            }
            SmokeError::WorkingDirectoryUnavailable(_) => {
                "The current working directory cannot be read".to_string()
            }
            SmokeError::IoError(_) => "Failed to write diagnostic output".to_string(),
            SmokeError::ConfigError { .. } | SmokeError::InvalidConfigValueError { .. } => {
                format!("Invalid probe configuration: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Runtime => {
                "Install python3 in the image or make sure it is on PATH"
            }
            ErrorCategory::Environment => {
                "Check that the container's WORKDIR exists and is readable"
            }
            ErrorCategory::Output => "Check that stdout is attached and not closed early",
            ErrorCategory::Configuration => "Fix the probe configuration and rebuild",
        }
    }
}

pub type Result<T> = std::result::Result<T, SmokeError>;
