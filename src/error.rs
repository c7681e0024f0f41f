//! Error types for Sprout
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sprout operations
pub type SproutResult<T> = Result<T, SproutError>;

/// Main error type for Sprout operations
#[derive(Error, Debug)]
pub enum SproutError {
    /// A path failed sanitization before being handed to a subprocess
    #[error("invalid path '{input}': {reason}")]
    InvalidPath { input: String, reason: String },

    /// Node.js is older than the supported minimum
    #[error("Node.js {required} or newer is required, found {found}")]
    UnsupportedRuntime { required: u32, found: String },

    /// A required executable could not be run
    #[error("{tool} is not installed")]
    MissingDependency { tool: String },

    /// Target directory exists and already has content
    #[error("directory {} is not empty", path.display())]
    DirectoryNotEmpty { path: PathBuf },

    /// Template could not be fetched
    #[error("failed to acquire template: {message}")]
    Acquisition { message: String },

    /// package.json is valid JSON but not an object
    #[error("{} is not a JSON object", path.display())]
    MalformedDescriptor { path: PathBuf },

    /// A subprocess exited unsuccessfully
    #[error("`{command}` failed with {}", describe_exit(*code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Configuration could not be loaded
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl SproutError {
    pub(crate) fn invalid_path(input: impl Into<String>, reason: impl Into<String>) -> Self {
        SproutError::InvalidPath {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn acquisition(message: impl Into<String>) -> Self {
        SproutError::Acquisition {
            message: message.into(),
        }
    }
}
