use std::path::PathBuf;

use gridsplit_layout::{LayoutConfigError, LayoutError, TemplateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for malformed templates, configs and arguments.
pub const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Template(#[from] TemplateError),

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("{0}")]
    Config(#[from] LayoutConfigError),

    #[error("invalid layout config: {}", problems.join("; "))]
    InvalidConfig { problems: Vec<String> },

    #[error("preset not found: {name}")]
    PresetNotFound { name: String },

    #[error("unsupported config format: {path} (expected .toml or .json)")]
    UnsupportedConfigFormat { path: PathBuf },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::Json(_) => 1,
            Self::Config(LayoutConfigError::Io(_)) => 1,
            _ => EXIT_INVALID_INPUT,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
