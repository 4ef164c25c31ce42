//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{
    build_forwarded_args, resolve_config_override, resolve_viewer_dir, LaunchProfile, DEFAULT_PORT,
};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Launch(LaunchProfile),
    Cli(CliCommand),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Report launch readiness without running any setup step.
    #[command(about = "Report launch readiness as JSON")]
    Doctor(DoctorArgs),
}

/// Arguments for `doctor`.
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Viewer workspace directory (overrides MEMVIEWER_DIR and the
    /// executable-relative lookup).
    #[arg(long = "viewer-dir")]
    pub viewer_dir_override: Option<PathBuf>,
    /// Path to launcher.toml (overrides MEMVIEWER_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Start the Claude memory viewer",
    long_about = None
)]
pub struct LaunchArgs {
    /// Port the viewer server listens on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Path to the Claude projects directory (the viewer falls back to
    /// ~/.claude/projects when omitted).
    #[arg(long = "claude-path")]
    pub claude_path: Option<PathBuf>,
    /// Do not open the browser automatically.
    #[arg(long = "no-open", default_value_t = false)]
    pub no_open: bool,
    /// Viewer workspace directory (overrides MEMVIEWER_DIR and the
    /// executable-relative lookup).
    #[arg(long = "viewer-dir")]
    pub viewer_dir_override: Option<PathBuf>,
    /// Path to launcher.toml (overrides MEMVIEWER_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl LaunchArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let viewer_dir = resolve_viewer_dir(self.viewer_dir_override)?;
        let config_override = resolve_config_override(self.config_override);
        let launch_args =
            build_forwarded_args(self.port, self.claude_path.as_deref(), self.no_open);

        Ok(LaunchProfile {
            viewer_dir,
            port: self.port,
            claude_path: self.claude_path,
            no_open: self.no_open,
            config_override,
            launch_args,
        })
    }

    /// Parse CLI args into either launch mode or utility command mode.
    /// Top-level workspace/config overrides apply to `doctor` unless it
    /// sets its own.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(CliCommand::Doctor(mut doctor)) => {
                if doctor.viewer_dir_override.is_none() {
                    doctor.viewer_dir_override = self.viewer_dir_override;
                }
                if doctor.config_override.is_none() {
                    doctor.config_override = self.config_override;
                }
                Ok(ParsedCommand::Cli(CliCommand::Doctor(doctor)))
            }
            None => Ok(ParsedCommand::Launch(self.build()?)),
        }
    }
}
