//! Launch readiness probe backing the `doctor` CLI command.

use std::{path::Path, process::Command};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::{launcher::config::LauncherConfig, lib::paths::workspace_subdir};

/// Abstraction for environment access during readiness checks.
pub trait EnvironmentProbe {
    fn package_manager_version(&self, program: &str) -> Option<String>;
    fn dir_exists(&self, path: &Path) -> bool;
}

/// Probe that operates against the real environment.
pub struct SystemProbe;

impl EnvironmentProbe for SystemProbe {
    fn package_manager_version(&self, program: &str) -> Option<String> {
        let output = Command::new(program).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!version.is_empty()).then_some(version)
    }

    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Launch readiness report rendered by the `doctor` command.
#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub ready: bool,
    pub viewer_dir: String,
    pub viewer_dir_exists: bool,
    pub package_manager: String,
    pub package_manager_version: Option<String>,
    pub dependencies_installed: bool,
    pub build_artifacts_present: bool,
    pub pending_steps: Vec<&'static str>,
    pub checked_at: String,
}

/// Collect readiness state for the given workspace. Missing setup artifacts
/// are reported as pending steps, not errors; `ready` only requires the
/// workspace and the package manager to exist.
pub fn run(probe: &dyn EnvironmentProbe, viewer_dir: &Path, config: &LauncherConfig) -> DoctorReport {
    let viewer_dir_exists = probe.dir_exists(viewer_dir);
    let dependencies_installed = viewer_dir_exists
        && probe.dir_exists(&workspace_subdir(viewer_dir, &config.layout.dependency_dir));
    let build_artifacts_present = viewer_dir_exists
        && probe.dir_exists(&workspace_subdir(viewer_dir, &config.layout.build_dir));
    let package_manager_version =
        probe.package_manager_version(&config.commands.package_manager);

    let mut pending_steps = Vec::new();
    if !dependencies_installed {
        pending_steps.push("install");
    }
    if !build_artifacts_present {
        pending_steps.push("build");
    }

    DoctorReport {
        ready: viewer_dir_exists && package_manager_version.is_some(),
        viewer_dir: viewer_dir.display().to_string(),
        viewer_dir_exists,
        package_manager: config.commands.package_manager.clone(),
        package_manager_version,
        dependencies_installed,
        build_artifacts_present,
        pending_steps,
        checked_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
