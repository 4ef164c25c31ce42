//! Telemetry initialization and launch step span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a launch step.
pub struct StepSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl StepSpan {
    /// Start a step span.
    pub fn start(run_id: Uuid, step: &'static str) -> Self {
        let span = info_span!(
            target: "memviewer::step",
            "launch_step",
            %run_id,
            step
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "memviewer::step",
            run_id = %self.run_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launch step"
        );
    }
}

/// Payload for logging the resolved launch state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct LaunchModeTelemetry<'a> {
    pub viewer_dir: &'a str,
    pub port: u16,
    pub claude_path: Option<&'a str>,
    pub no_open: bool,
    pub package_manager: &'a str,
    pub launch_args: &'a [String],
}

/// Emit the resolved launch profile to `tracing`.
pub fn emit_launch_mode(telemetry: &LaunchModeTelemetry<'_>) {
    info!(
        target: "memviewer::launch",
        viewer_dir = telemetry.viewer_dir,
        port = telemetry.port,
        claude_path = telemetry.claude_path.unwrap_or(""),
        no_open = telemetry.no_open,
        package_manager = telemetry.package_manager,
        launch_args = ?telemetry.launch_args,
        "Resolved launch profile"
    );
}
