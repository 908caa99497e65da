// Interrupt handling in the built binary
#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

#[test]
fn test_sigint_during_simulation_keeps_session() {
    let dir = tempfile::tempdir().expect("temp dir");
    let slow_compiler = dir.path().join("slow-iverilog");
    fs::write(&slow_compiler, "#!/bin/sh\nsleep 2\n").expect("write script");
    fs::set_permissions(&slow_compiler, fs::Permissions::from_mode(0o755)).expect("chmod");

    let mut child = Command::new(env!("CARGO_BIN_EXE_verepl"))
        .env_remove("RUST_LOG")
        .env("VEREPL_SIMULATOR", "iverilog")
        .env("VEREPL_IVERILOG", &slow_compiler)
        .env("VEREPL_VVP", "true")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn verepl");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"e 1\nenv\n")
        .expect("write input");

    thread::sleep(Duration::from_millis(800));
    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("run kill");
    assert!(status.success());

    let output = child.wait_with_output().expect("wait for verepl");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "status={:?} stdout={:?}", output.status, stdout);
    assert!(stdout.contains("[empty]"), "env did not run: {:?}", stdout);
    assert!(stdout.ends_with('\n'));
}
