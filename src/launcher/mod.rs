//! Launch pipeline: config load, preparation steps, delegated run.
pub mod config;
pub mod doctor;
mod exit;
mod runner;
mod steps;

pub use exit::RuntimeExit;
pub use runner::{run_viewer, RunOutcome};
pub use steps::{ensure_build, ensure_dependencies};

use uuid::Uuid;

use crate::{
    cli::LaunchProfile,
    lib::{errors::LaunchError, telemetry},
};
use config::LauncherConfig;

/// Prepare the viewer workspace and hand off to the start command.
///
/// Steps run strictly in order; a failing install means the build check
/// never happens, and a failing setup step means the viewer never starts.
pub async fn launch(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let config = LauncherConfig::load(&profile.viewer_dir, profile.config_override.clone())
        .map_err(RuntimeExit::from_error)?;

    let viewer_dir_display = profile.viewer_dir.display().to_string();
    let claude_path_display = profile
        .claude_path
        .as_ref()
        .map(|path| path.display().to_string());
    telemetry::emit_launch_mode(&telemetry::LaunchModeTelemetry {
        viewer_dir: &viewer_dir_display,
        port: profile.port,
        claude_path: claude_path_display.as_deref(),
        no_open: profile.no_open,
        package_manager: &config.commands.package_manager,
        launch_args: &profile.launch_args,
    });

    let run_id = Uuid::new_v4();
    ensure_dependencies(&profile, &config, run_id)
        .await
        .map_err(RuntimeExit::from_launch_error)?;
    ensure_build(&profile, &config, run_id)
        .await
        .map_err(RuntimeExit::from_launch_error)?;

    match run_viewer(&profile, &config, run_id)
        .await
        .map_err(RuntimeExit::from_launch_error)?
    {
        RunOutcome::Completed(status) if !status.success() => Err(
            RuntimeExit::from_launch_error(LaunchError::StartFailed {
                exit_code: status.code(),
            }),
        ),
        RunOutcome::Completed(_) | RunOutcome::Interrupted => Ok(()),
    }
}
