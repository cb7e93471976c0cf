//! Error types for paddockctl CLI

use std::path::PathBuf;

use paddock_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputNotFound(_) | CliError::Config(ConfigError::NotFound(_)) => 2,
            CliError::Config(ConfigError::Invalid { .. }) => 3,
            CliError::Json { .. } | CliError::Config(ConfigError::Parse(_)) => 4,
            CliError::Io { .. } | CliError::Config(ConfigError::Io { .. }) => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::InputNotFound(_) | CliError::Config(ConfigError::NotFound(_)) => "not_found",
            CliError::Config(ConfigError::Invalid { .. }) => "invalid_config",
            CliError::Json { .. } | CliError::Config(ConfigError::Parse(_)) => "parse",
            CliError::Io { .. } | CliError::Config(ConfigError::Io { .. }) => "io",
        }
    }
}
