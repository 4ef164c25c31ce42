use std::process::Stdio;

use tokio::process::Command;

use crate::common::{launcher_command, StubBehaviour, StubWorkspace, BINARY_PATH};

#[tokio::test]
async fn only_start_runs_when_workspace_is_prepared() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    let output = launcher_command(&workspace, &["--port", "4000"])
        .output()
        .await
        .expect("launcher should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(workspace.calls(), vec!["start -- --port 4000"]);
}

#[tokio::test]
async fn missing_dependencies_trigger_install_before_start() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    workspace.create_build_dir();

    let output = launcher_command(
        &workspace,
        &["--claude-path", "/data/projects", "--no-open"],
    )
    .output()
    .await
    .expect("launcher should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        workspace.calls(),
        vec![
            "install",
            "start -- --port 30010 --claude-path /data/projects --no-open"
        ]
    );
}

#[tokio::test]
async fn fresh_workspace_runs_install_then_build_then_start() {
    let workspace = StubWorkspace::new(StubBehaviour::default());

    let output = launcher_command(&workspace, &[])
        .output()
        .await
        .expect("launcher should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        workspace.calls(),
        vec!["install", "run build", "start -- --port 30010"]
    );
}

#[tokio::test]
async fn failing_install_stops_the_pipeline() {
    let workspace = StubWorkspace::new(StubBehaviour {
        install: "exit 7",
        ..Default::default()
    });

    let output = launcher_command(&workspace, &[])
        .output()
        .await
        .expect("launcher should run");

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(workspace.calls(), vec!["install"]);
}

#[tokio::test]
async fn failing_build_skips_start() {
    let workspace = StubWorkspace::new(StubBehaviour {
        build: "exit 3",
        ..Default::default()
    });
    workspace.create_dependency_dir();

    let output = launcher_command(&workspace, &[])
        .output()
        .await
        .expect("launcher should run");

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(workspace.calls(), vec!["run build"]);
}

#[tokio::test]
async fn failing_start_propagates_the_exit_code() {
    let workspace = StubWorkspace::new(StubBehaviour {
        start: "exit 5",
        ..Default::default()
    });
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    let output = launcher_command(&workspace, &[])
        .output()
        .await
        .expect("launcher should run");

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(workspace.calls(), vec!["start -- --port 30010"]);
}

#[tokio::test]
async fn viewer_dir_env_var_is_honoured_without_a_flag() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    // Env resolution is exercised through the spawned binary; the variable
    // is scoped to the child and cannot race other tests.
    let output = Command::new(BINARY_PATH)
        .env("MEMVIEWER_DIR", workspace.viewer_dir())
        .arg("--port")
        .arg("4100")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .expect("launcher should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(workspace.calls(), vec!["start -- --port 4100"]);
}

#[tokio::test]
async fn malformed_port_fails_before_any_side_effect() {
    let workspace = StubWorkspace::new(StubBehaviour::default());

    let output = launcher_command(&workspace, &["--port", "not-a-port"])
        .output()
        .await
        .expect("launcher should run");

    assert_eq!(output.status.code(), Some(2), "clap rejects the value");
    assert!(
        workspace.calls().is_empty(),
        "no external command may run after an argument error"
    );
}

#[tokio::test]
async fn banner_shows_the_documented_default_source_path() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    let output = launcher_command(&workspace, &[])
        .output()
        .await
        .expect("launcher should run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Reading from: ~/.claude/projects"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("http://localhost:30010"),
        "stdout: {stdout}"
    );
}
