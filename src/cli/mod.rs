//! CLI entrypoint module structure.
use anyhow::Result;

pub mod args;
pub mod profile;

pub use args::{CliCommand, DoctorArgs, LaunchArgs, ParsedCommand};
pub use profile::{
    build_forwarded_args, resolve_config_override, resolve_viewer_dir, viewer_dir_candidate,
    LaunchProfile, DEFAULT_PORT, DOCUMENTED_CLAUDE_PATH,
};

use crate::launcher::{
    config::LauncherConfig,
    doctor::{self, SystemProbe},
};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand) -> Result<String> {
    match command {
        CliCommand::Doctor(args) => {
            let viewer_dir = viewer_dir_candidate(args.viewer_dir_override)?;
            let config_override = resolve_config_override(args.config_override);
            let config = LauncherConfig::load(&viewer_dir, config_override)?;
            let report = doctor::run(&SystemProbe, &viewer_dir, &config);
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
