use small_calc::utils::validation::Validate;
use small_calc::{CalcError, JobOutput, JobRunner, OverflowPolicy, RunSummary, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_job_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_job_file_end_to_end() {
    let file = write_job_file(
        r#"
[[jobs]]
op = "add"
a = 2
b = 3

[[jobs]]
op = "multiply"
x = 2.0
y = 3.5

[[jobs]]
op = "format"
message = "hi"

[[jobs]]
op = "print"
numbers = [1, 2, 3]

[[jobs]]
op = "print"
numbers = []

[[jobs]]
op = "average"
numbers = [2, 4, 9]
"#,
    );

    let config = TomlConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let runner = JobRunner::new(config);
    let mut out = Vec::new();
    let (report, result) = runner.run_with_report(&mut out);
    result.unwrap();

    assert_eq!(
        report.summary,
        RunSummary {
            succeeded: 6,
            failed: 0
        }
    );
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "5\n7\nMessage: hi\n1 2 3 \n\n5\n"
    );
    assert_eq!(report.jobs[0].output, Some(JobOutput::Integer(5)));
    assert_eq!(report.jobs[3].output, Some(JobOutput::Printed));
}

#[test]
fn test_overflow_policy_from_file_and_override() {
    let file = write_job_file(
        r#"
[settings]
overflow = "saturating"

[[jobs]]
op = "add"
a = 2147483647
b = 10
"#,
    );

    let mut config = TomlConfig::from_file(file.path()).unwrap();
    {
        let runner = JobRunner::new(config.clone());
        let mut out = Vec::new();
        runner.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2147483647\n");
    }

    config.set_overflow(OverflowPolicy::Checked);
    let runner = JobRunner::new(config);
    let mut out = Vec::new();
    let err = runner.run(&mut out).unwrap_err();
    assert!(matches!(
        err,
        CalcError::OverflowError {
            a: 2147483647,
            b: 10
        }
    ));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_continue_on_error_report_serializes() {
    let file = write_job_file(
        r#"
[settings]
overflow = "checked"
continue_on_error = true

[[jobs]]
op = "add"
a = -2147483648
b = -1

[[jobs]]
op = "format"
message = ""
"#,
    );

    let runner = JobRunner::new(TomlConfig::from_file(file.path()).unwrap());
    let mut out = Vec::new();
    let (report, result) = runner.run_with_report(&mut out);
    assert!(result.is_ok());
    assert_eq!(String::from_utf8(out).unwrap(), "Message: \n");

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"], serde_json::json!({"succeeded": 1, "failed": 1}));
    assert_eq!(json["stopped_early"], false);
    assert_eq!(json["jobs"][0]["op"], "add");
    assert!(json["jobs"][0]["error"]
        .as_str()
        .unwrap()
        .contains("overflow"));
    assert_eq!(
        json["jobs"][1]["output"],
        serde_json::json!({"kind": "text", "value": "Message: "})
    );
}
