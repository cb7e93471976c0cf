//! Reading input files and configuration

use std::path::Path;

use paddock_config::AnalysisConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CliError;

/// Deserialize a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CliError::InputNotFound(path.to_path_buf())
        } else {
            CliError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let value = serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Read input file");
    Ok(value)
}

/// The configuration from `path`, or the embedded defaults.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    match path {
        Some(path) => Ok(AnalysisConfig::load_from_path(path)?),
        None => Ok(AnalysisConfig::embedded()?),
    }
}
