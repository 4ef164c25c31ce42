//! Shared helpers for building package-manager commands.

use std::{path::Path, process::Stdio};

use tokio::process::Command;

/// One package-manager invocation scoped to the viewer workspace.
pub struct ViewerCommandSpec<'a> {
    pub program: &'a str,
    pub args: &'a [String],
    pub viewer_dir: &'a Path,
}

/// Build a package-manager command that runs in the viewer workspace with
/// the launcher's own stdio, so output streams live instead of being
/// captured.
pub fn build_viewer_command(spec: ViewerCommandSpec<'_>, forwarded: &[String]) -> Command {
    let mut command = Command::new(spec.program);
    command.kill_on_drop(true);
    command.current_dir(spec.viewer_dir);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command.args(spec.args);
    command.args(forwarded);
    command
}

/// Render an argv line for logs and error messages.
pub fn render_argv(program: &str, args: &[String], forwarded: &[String]) -> String {
    let mut parts = Vec::with_capacity(1 + args.len() + forwarded.len());
    parts.push(program.to_string());
    parts.extend(args.iter().cloned());
    parts.extend(forwarded.iter().cloned());
    parts.join(" ")
}
