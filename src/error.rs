//! Error types for jpackage-task

use thiserror::Error;

/// Result type for jpackage operations
pub type JPackageResult<T> = Result<T, JPackageError>;

/// Errors that can occur while locating or running jpackage
#[derive(Error, Debug)]
pub enum JPackageError {
    /// No usable installation to take the executable from
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// The tool ran to completion but exited with a nonzero code
    #[error("Error while executing {executable}: exit code {code}")]
    Execution {
        /// Name of the executable that failed
        executable: String,
        /// Exit code, `-1` when the process was terminated by a signal
        code: i32,
    },

    /// I/O error (including spawn failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JPackageError {
    /// Exit code carried by an execution failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            JPackageError::Execution { code, .. } => Some(*code),
            _ => None,
        }
    }
}
