use std::process::Stdio;

use tokio::process::Command;

use crate::common::{launcher_command, StubBehaviour, StubWorkspace, BINARY_PATH};

#[tokio::test]
async fn doctor_lists_pending_steps_for_a_fresh_workspace() {
    let workspace = StubWorkspace::new(StubBehaviour::default());

    let output = launcher_command(&workspace, &["doctor"])
        .output()
        .await
        .expect("doctor should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"ready\": true"), "stdout: {stdout}");
    assert!(
        stdout.contains("\"dependencies_installed\": false"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("\"install\""), "stdout: {stdout}");
    assert!(stdout.contains("\"build\""), "stdout: {stdout}");
}

#[tokio::test]
async fn doctor_reports_a_prepared_workspace_with_no_pending_steps() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    let output = launcher_command(&workspace, &["doctor"])
        .output()
        .await
        .expect("doctor should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("\"dependencies_installed\": true"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("\"build_artifacts_present\": true"),
        "stdout: {stdout}"
    );
    assert!(
        stdout.contains("\"pending_steps\": []"),
        "stdout: {stdout}"
    );
}

#[tokio::test]
async fn doctor_is_not_ready_when_the_viewer_dir_is_missing() {
    let workspace = StubWorkspace::new(StubBehaviour::default());
    let missing = workspace.viewer_dir().join("nope");

    let output = Command::new(BINARY_PATH)
        .arg("doctor")
        .arg("--viewer-dir")
        .arg(&missing)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .expect("doctor should run");

    assert!(
        output.status.success(),
        "doctor reports readiness, it does not fail"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"ready\": false"), "stdout: {stdout}");
    assert!(
        stdout.contains("\"viewer_dir_exists\": false"),
        "stdout: {stdout}"
    );
}
