//! LaunchProfile and viewer workspace/config resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};

/// Default port the viewer listens on.
pub const DEFAULT_PORT: u16 = 30010;
/// Source directory the viewer itself falls back to when no path is
/// forwarded. Shown to the user, never injected into the command line.
pub const DOCUMENTED_CLAUDE_PATH: &str = "~/.claude/projects";

const MEMVIEWER_DIR_ENV: &str = "MEMVIEWER_DIR";
const MEMVIEWER_CONFIG_ENV: &str = "MEMVIEWER_CONFIG_PATH";

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub viewer_dir: PathBuf,
    pub port: u16,
    pub claude_path: Option<PathBuf>,
    pub no_open: bool,
    pub config_override: Option<PathBuf>,
    pub launch_args: Vec<String>,
}

/// Candidate viewer directory, in the order: CLI override → `MEMVIEWER_DIR`
/// → the directory containing the launcher executable → current directory.
pub fn viewer_dir_candidate(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    if let Some(dir) = env::var_os(MEMVIEWER_DIR_ENV).map(PathBuf::from) {
        if !dir.as_os_str().is_empty() {
            return Ok(dir);
        }
    }

    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            return Ok(dir.to_path_buf());
        }
    }

    env::current_dir().context("failed to obtain current directory")
}

/// Resolve the viewer directory and require it to exist before any external
/// command runs.
pub fn resolve_viewer_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = viewer_dir_candidate(override_dir)?;
    if !dir.is_dir() {
        bail!("viewer directory {} does not exist", dir.display());
    }
    Ok(dir)
}

/// Resolve the config override in the order: CLI override → env var.
/// `None` means "use launcher.toml in the viewer directory if present".
pub fn resolve_config_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path.or_else(|| {
        env::var_os(MEMVIEWER_CONFIG_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
    })
}

/// Arguments forwarded to the viewer start command.
pub fn build_forwarded_args(port: u16, claude_path: Option<&Path>, no_open: bool) -> Vec<String> {
    let mut args = vec!["--port".to_string(), port.to_string()];

    if let Some(path) = claude_path {
        args.push("--claude-path".to_string());
        args.push(path.display().to_string());
    }

    if no_open {
        args.push("--no-open".to_string());
    }

    args
}
