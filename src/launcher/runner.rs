//! Delegated viewer start command and interrupt handling.

use std::process::ExitStatus;

use tokio::signal;
use tracing::info;
use uuid::Uuid;

use crate::{
    cli::{LaunchProfile, DOCUMENTED_CLAUDE_PATH},
    launcher::config::LauncherConfig,
    lib::{
        command::{build_viewer_command, render_argv, ViewerCommandSpec},
        errors::LaunchError,
        telemetry::StepSpan,
    },
};

/// Outcome of the delegated viewer run.
#[derive(Debug)]
pub enum RunOutcome {
    Completed(ExitStatus),
    Interrupted,
}

/// Run the viewer start command with inherited stdio until it exits or the
/// user interrupts. An interrupt is a clean stop, not a failure; the child
/// is killed on drop.
pub async fn run_viewer(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    run_id: Uuid,
) -> Result<RunOutcome, LaunchError> {
    let commands = &config.commands;
    let argv = render_argv(
        &commands.package_manager,
        &commands.start_args,
        &profile.launch_args,
    );
    let mut command = build_viewer_command(
        ViewerCommandSpec {
            program: &commands.package_manager,
            args: &commands.start_args,
            viewer_dir: &profile.viewer_dir,
        },
        &profile.launch_args,
    );

    print_startup_banner(profile);
    info!(
        target: "memviewer::launch",
        run_id = %run_id,
        argv = %argv,
        "Delegating to the viewer start command"
    );

    let span = StepSpan::start(run_id, "start");
    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        command: argv.clone(),
        source,
    })?;

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(|source| LaunchError::Spawn {
                command: argv,
                source,
            })?;
            span.finish(
                if status.success() { "succeeded" } else { "failed" },
                status.code(),
            );
            Ok(RunOutcome::Completed(status))
        }
        _ = signal::ctrl_c() => {
            println!("\nStopping memory viewer...");
            info!(
                target: "memviewer::launch",
                run_id = %run_id,
                "Interrupted by user"
            );
            span.finish("interrupted", None);
            Ok(RunOutcome::Interrupted)
        }
    }
}

fn print_startup_banner(profile: &LaunchProfile) {
    let source = profile
        .claude_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| DOCUMENTED_CLAUDE_PATH.to_string());

    println!("Starting memory viewer on port {}...", profile.port);
    println!("Reading from: {source}");
    println!("Open http://localhost:{} in your browser", profile.port);
    println!("Press Ctrl+C to stop the server\n");
}
