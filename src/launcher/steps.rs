//! Dependency and build preparation steps.

use std::process::ExitStatus;

use tracing::info;
use uuid::Uuid;

use crate::{
    cli::LaunchProfile,
    launcher::config::LauncherConfig,
    lib::{
        command::{build_viewer_command, render_argv, ViewerCommandSpec},
        errors::LaunchError,
        paths::workspace_subdir,
        telemetry::StepSpan,
    },
};

/// Install dependencies when the dependency directory is missing. The check
/// is a pure existence test; an existing directory means the install command
/// is never invoked for this run.
pub async fn ensure_dependencies(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    run_id: Uuid,
) -> Result<(), LaunchError> {
    let marker = workspace_subdir(&profile.viewer_dir, &config.layout.dependency_dir);
    if marker.is_dir() {
        info!(
            target: "memviewer::step",
            run_id = %run_id,
            marker = %marker.display(),
            "Dependencies already installed"
        );
        return Ok(());
    }

    println!("Installing viewer dependencies...");
    let status = run_setup_step(
        profile,
        &config.commands.package_manager,
        &config.commands.install_args,
        run_id,
        "install",
    )
    .await?;

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::InstallFailed {
            exit_code: status.code(),
        })
    }
}

/// Build the viewer when the build-output directory is missing. Runs only
/// after the dependency step succeeded.
pub async fn ensure_build(
    profile: &LaunchProfile,
    config: &LauncherConfig,
    run_id: Uuid,
) -> Result<(), LaunchError> {
    let marker = workspace_subdir(&profile.viewer_dir, &config.layout.build_dir);
    if marker.is_dir() {
        info!(
            target: "memviewer::step",
            run_id = %run_id,
            marker = %marker.display(),
            "Build artifacts already present"
        );
        return Ok(());
    }

    println!("Building viewer...");
    let status = run_setup_step(
        profile,
        &config.commands.package_manager,
        &config.commands.build_args,
        run_id,
        "build",
    )
    .await?;

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::BuildFailed {
            exit_code: status.code(),
        })
    }
}

async fn run_setup_step(
    profile: &LaunchProfile,
    program: &str,
    args: &[String],
    run_id: Uuid,
    step: &'static str,
) -> Result<ExitStatus, LaunchError> {
    let span = StepSpan::start(run_id, step);
    let mut command = build_viewer_command(
        ViewerCommandSpec {
            program,
            args,
            viewer_dir: &profile.viewer_dir,
        },
        &[],
    );

    match command.status().await {
        Ok(status) => {
            span.finish(
                if status.success() { "succeeded" } else { "failed" },
                status.code(),
            );
            Ok(status)
        }
        Err(source) => {
            span.finish("spawn_failed", None);
            Err(LaunchError::Spawn {
                command: render_argv(program, args, &[]),
                source,
            })
        }
    }
}
