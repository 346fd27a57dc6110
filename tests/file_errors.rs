use std::fs;
use std::process::Command;

const BINARIES: [&str; 3] = [
    env!("CARGO_BIN_EXE_check_central"),
    env!("CARGO_BIN_EXE_state_counts"),
    env!("CARGO_BIN_EXE_ministry_counts"),
];

#[test]
fn missing_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    for exe in BINARIES {
        let output = Command::new(exe)
            .current_dir(dir.path())
            .output()
            .expect("run failed");
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Final Dataset 0601.json"));
        assert!(stderr.contains("Check that the file exists"));
    }
}

#[test]
fn malformed_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Final Dataset 0601.json"), b"[{\"states\": [").unwrap();
    for exe in BINARIES {
        let output = Command::new(exe)
            .current_dir(dir.path())
            .output()
            .expect("run failed");
        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Verify the file is intact"));
    }
}

#[test]
fn zero_top_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Final Dataset 0601.json"), b"[]").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_state_counts"))
        .args(["--top", "0"])
        .current_dir(dir.path())
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--top must be at least 1"));
}
