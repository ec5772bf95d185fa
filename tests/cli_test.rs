use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::{NamedTempFile, TempDir};

fn small_calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_small-calc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_single_operations() {
    let output = small_calc(&["add", "2", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "5\n");

    let output = small_calc(&["multiply", "2", "-3.5"]);
    assert_eq!(stdout_of(&output), "-7\n");

    let output = small_calc(&["format", "hi"]);
    assert_eq!(stdout_of(&output), "Message: hi\n");

    let output = small_calc(&["print", "1", "2", "3"]);
    assert_eq!(stdout_of(&output), "1 2 3 \n");

    let output = small_calc(&["print"]);
    assert_eq!(stdout_of(&output), "\n");
}

#[test]
fn test_checked_overflow_exit_code() {
    let output = small_calc(&["--overflow", "checked", "add", "2147483647", "1"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "");

    let output = small_calc(&["add", "2147483647", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-2147483648\n");
}

#[test]
fn test_run_job_file_with_report() {
    let mut jobs = NamedTempFile::new().unwrap();
    jobs.write_all(b"[[jobs]]\nop = \"format\"\nmessage = \"from file\"\n\n[[jobs]]\nop = \"print\"\nnumbers = [4, 5]\n")
        .unwrap();
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.json");

    let output = small_calc(&[
        "run",
        "--config",
        jobs.path().to_str().unwrap(),
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Message: from file\n4 5 \n");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["succeeded"], 2);
}

#[test]
fn test_missing_job_file_exit_code() {
    let output = small_calc(&["run", "--config", "/nonexistent/jobs.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("jobs.toml"));
}

#[test]
fn test_broken_stdout_exit_code() {
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);

    let output = Command::new(env!("CARGO_BIN_EXE_small-calc"))
        .args(["print", "1", "2", "3"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(writer))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not write output"));
}

#[test]
fn test_report_written_when_run_stops() {
    let mut jobs = NamedTempFile::new().unwrap();
    jobs.write_all(
        b"[settings]\noverflow = \"checked\"\n\n\
[[jobs]]\nop = \"multiply\"\nx = 1e308\ny = 10\n\n\
[[jobs]]\nop = \"add\"\na = 2147483647\nb = 1\n\n\
[[jobs]]\nop = \"format\"\nmessage = \"never\"\n",
    )
    .unwrap();
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.json");

    let output = small_calc(&[
        "run",
        "--config",
        jobs.path().to_str().unwrap(),
        "--report",
        report_path.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout_of(&output), "inf\n");

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["stopped_early"], true);
    assert_eq!(report["summary"]["succeeded"], 1);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["jobs"].as_array().unwrap().len(), 2);
    assert_eq!(report["jobs"][0]["output"]["value"], "inf");
}
