use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::common::{launcher_command, StubBehaviour, StubWorkspace};

#[tokio::test]
async fn interrupt_during_run_exits_with_success() {
    let workspace = StubWorkspace::new(StubBehaviour {
        start: "exec sleep 30",
        ..Default::default()
    });
    workspace.create_dependency_dir();
    workspace.create_build_dir();

    let mut child = launcher_command(&workspace, &[])
        .spawn()
        .expect("launcher should spawn");

    // Wait until the stub start command has been invoked, then give the
    // launcher a moment to reach its signal handler.
    let deadline = Instant::now() + Duration::from_secs(10);
    while !workspace.calls().iter().any(|line| line.starts_with("start")) {
        assert!(
            Instant::now() < deadline,
            "start command never ran: {:?}",
            workspace.calls()
        );
        sleep(Duration::from_millis(50)).await;
    }
    sleep(Duration::from_millis(300)).await;

    let pid = child.id().expect("launcher pid should be available") as i32;
    unsafe {
        libc::kill(pid, libc::SIGINT);
    }

    let output = child
        .wait_with_output()
        .await
        .expect("launcher should exit after SIGINT");

    assert!(
        output.status.success(),
        "interrupt must be a clean stop, got {:?} (stderr: {})",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Stopping memory viewer"),
        "stdout: {stdout}"
    );
}
