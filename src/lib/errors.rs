use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// High-level failure types surfaced while preparing or running the viewer.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Dependency install failed (exit={exit_code:?})")]
    InstallFailed { exit_code: Option<i32> },
    #[error("Viewer build failed (exit={exit_code:?})")]
    BuildFailed { exit_code: Option<i32> },
    #[error("Viewer exited abnormally (exit={exit_code:?})")]
    StartFailed { exit_code: Option<i32> },
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit code reported by the failing external command, when one exists.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchError::InstallFailed { exit_code }
            | LaunchError::BuildFailed { exit_code }
            | LaunchError::StartFailed { exit_code } => *exit_code,
            LaunchError::Spawn { .. } => None,
        }
    }
}
