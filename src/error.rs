//! Error types for the RFC tools.

use std::path::PathBuf;

use thiserror::Error;

/// Tool error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error in {}: {}", .path.display(), .message)]
    ConfigParse { path: PathBuf, message: String },

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Invalid input for RFC type: {0:?}")]
    InvalidCategory(String),

    #[error("Could not read pull request number from {0:?}")]
    InvalidPullRequest(String),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn other(message: impl Into<String>) -> Self {
        Error::Other(message.into())
    }
}

/// Failure of an external `git` or `gh` invocation.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error running command: {command} ({status})\n{stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}
