//! Load and validate launcher configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

/// Package manager used when no configuration overrides it.
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";
/// Directory that marks dependencies as installed.
pub const DEFAULT_DEPENDENCY_DIR: &str = "node_modules";
/// Directory that marks build artifacts as present.
pub const DEFAULT_BUILD_DIR: &str = "dist";

const DEFAULT_CONFIG_FILE: &str = "launcher.toml";

/// `[commands]` section: package-manager invocations for each step.
#[derive(Debug, Clone)]
pub struct CommandsSection {
    pub package_manager: String,
    pub install_args: Vec<String>,
    pub build_args: Vec<String>,
    pub start_args: Vec<String>,
}

impl Default for CommandsSection {
    fn default() -> Self {
        Self {
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            install_args: vec!["install".to_string()],
            build_args: vec!["run".to_string(), "build".to_string()],
            start_args: vec!["start".to_string(), "--".to_string()],
        }
    }
}

/// `[layout]` section: workspace directories checked before each step.
#[derive(Debug, Clone)]
pub struct LayoutSection {
    pub dependency_dir: String,
    pub build_dir: String,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            dependency_dir: DEFAULT_DEPENDENCY_DIR.to_string(),
            build_dir: DEFAULT_BUILD_DIR.to_string(),
        }
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub commands: CommandsSection,
    pub layout: LayoutSection,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    commands: Option<RawCommandsSection>,
    layout: Option<RawLayoutSection>,
}

#[derive(Debug, Deserialize)]
struct RawCommandsSection {
    package_manager: Option<String>,
    install_args: Option<Vec<String>>,
    build_args: Option<Vec<String>>,
    start_args: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawLayoutSection {
    dependency_dir: Option<String>,
    build_dir: Option<String>,
}

impl LauncherConfig {
    /// Load configuration. An explicitly requested file must load; the
    /// default location (`launcher.toml` in the viewer directory) is
    /// optional and falls back to built-in defaults.
    pub fn load(viewer_dir: &Path, override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match override_path {
            Some(path) => Self::load_from_path(path),
            None => {
                let default_path = viewer_dir.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_path(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "memviewer::config",
            path = %path.display(),
            "Loading launcher configuration"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "memviewer::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "memviewer::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let commands = parse_commands_section(raw.commands, &path)?;
        let layout = parse_layout_section(raw.layout, &path)?;

        Ok(Self {
            commands,
            layout,
            source_path: Some(path),
        })
    }
}

fn parse_commands_section(
    raw: Option<RawCommandsSection>,
    path: &Path,
) -> Result<CommandsSection, ConfigError> {
    let defaults = CommandsSection::default();
    let Some(raw) = raw else {
        return Ok(defaults);
    };

    let package_manager = raw
        .package_manager
        .unwrap_or(defaults.package_manager);
    if package_manager.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "commands.package_manager",
            message: "must not be empty".to_string(),
        });
    }

    Ok(CommandsSection {
        package_manager,
        install_args: raw.install_args.unwrap_or(defaults.install_args),
        build_args: raw.build_args.unwrap_or(defaults.build_args),
        start_args: raw.start_args.unwrap_or(defaults.start_args),
    })
}

fn parse_layout_section(
    raw: Option<RawLayoutSection>,
    path: &Path,
) -> Result<LayoutSection, ConfigError> {
    let defaults = LayoutSection::default();
    let Some(raw) = raw else {
        return Ok(defaults);
    };

    let dependency_dir = raw.dependency_dir.unwrap_or(defaults.dependency_dir);
    let build_dir = raw.build_dir.unwrap_or(defaults.build_dir);

    validate_layout_dir(&dependency_dir, "layout.dependency_dir", path)?;
    validate_layout_dir(&build_dir, "layout.build_dir", path)?;

    Ok(LayoutSection {
        dependency_dir,
        build_dir,
    })
}

fn validate_layout_dir(value: &str, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "must not be empty".to_string(),
        });
    }
    if Path::new(value).is_absolute() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field,
            message: "must be relative to the viewer directory".to_string(),
        });
    }
    Ok(())
}
