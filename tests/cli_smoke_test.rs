use std::process::{Command, Output};
use tempfile::TempDir;

const EXPECTED_PREFIXES: [&str; 6] = [
    "Hello from Python!",
    "This is a test script running inside the Docker container.",
    "Python version: ",
    "Sum of [1, 2, 3, 4, 5] = 15",
    "Current working directory: ",
    "Test completed successfully!",
];

fn smoke_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_container-smoke"))
}

fn python_available() -> bool {
    which::which("python3").is_ok() || which::which("python").is_ok()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_run_without_arguments() {
    let temp_dir = TempDir::new().unwrap();
    let output = smoke_command()
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    let lines = stdout_lines(&output);

    if !python_available() {
        // Without Python only the static lines make it out.
        assert!(!output.status.success());
        assert_eq!(lines, EXPECTED_PREFIXES[..2]);
        return;
    }

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(lines.len(), 6, "stdout: {:?}", lines);
    for (line, prefix) in lines.iter().zip(EXPECTED_PREFIXES) {
        assert!(line.starts_with(prefix), "{:?} should start with {:?}", line, prefix);
    }
    assert_eq!(lines[0], EXPECTED_PREFIXES[0]);
    assert_eq!(lines[1], EXPECTED_PREFIXES[1]);
    assert_eq!(lines[3], EXPECTED_PREFIXES[3]);
    assert_eq!(lines[5], EXPECTED_PREFIXES[5]);
    assert!(lines[2].len() > "Python version: ".len());

    let reported = lines[4].trim_start_matches("Current working directory: ");
    assert_eq!(
        std::fs::canonicalize(reported).unwrap(),
        std::fs::canonicalize(temp_dir.path()).unwrap()
    );
}

#[test]
fn test_missing_interpreter_exits_non_zero() {
    let empty_path = TempDir::new().unwrap();
    let output = smoke_command()
        .env("PATH", empty_path.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(127));
    assert_eq!(stdout_lines(&output), EXPECTED_PREFIXES[..2]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Python is not installed"), "stderr: {}", stderr);
}

#[test]
fn test_arguments_are_rejected() {
    let output = smoke_command().arg("--json").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = smoke_command()
        .env("RUST_LOG", "container_smoke=debug")
        .output()
        .unwrap();
    let lines = stdout_lines(&output);

    assert!(lines.len() == 6 || lines.len() == 2, "stdout: {:?}", lines);
    for (line, prefix) in lines.iter().zip(EXPECTED_PREFIXES) {
        assert!(line.starts_with(prefix), "{:?} should start with {:?}", line, prefix);
    }
    assert!(!output.stderr.is_empty());
}
