use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_package-sorter"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run package-sorter")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_classify_prints_label() {
    let output = run(&["classify", "150", "10", "10", "20"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "REJECTED");
}

#[test]
fn test_classify_json_output() {
    let output = run(&["classify", "--output", "json", "100", "100", "100", "10"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["volume"], 1_000_000);
    assert_eq!(json["bulky"], true);
    assert_eq!(json["heavy"], false);
    assert_eq!(json["classification"], "SPECIAL");
}

#[test]
fn test_classify_rejects_invalid_values() {
    for args in [
        ["classify", "0", "10", "10", "5"],
        ["classify", "10", "-5", "10", "5"],
        ["classify", "10.5", "10", "10", "5"],
        ["classify", "10", "10", "10", "heavy"],
    ] {
        let output = run(&args);
        assert_eq!(output.status.code(), Some(2), "{:?}", args);
        assert!(stdout(&output).is_empty(), "{:?} must not classify", args);
    }
}

#[test]
fn test_self_test_passes() {
    let output = run(&["self-test"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Total tests: 24"));
}

#[test]
fn test_demo_succeeds() {
    let output = run(&["demo"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Demo completed successfully"));
}

#[test]
fn test_config_file_overrides_thresholds() {
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[thresholds]\nheavy_mass = 50\n\n[output]\nformat = \"json\"\n")
        .unwrap();
    let path = config.path().to_str().unwrap();

    let output = run(&["--config", path, "classify", "10", "10", "10", "25"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(json["classification"], "STANDARD");

    let output = run(&["--config", path, "self-test"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_invalid_config_exits_with_one() {
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[thresholds]\nheavy_mass = 0\n").unwrap();
    let path = config.path().to_str().unwrap();

    let output = run(&["--config", path, "demo"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_classify_json_reports_overflowing_volume_as_null() {
    let max = i64::MAX.to_string();
    let output = run(&["classify", "--output", "json", &max, &max, &max, "1"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert!(json["volume"].is_null());
    assert_eq!(json["bulky"], true);
    assert_eq!(json["classification"], "SPECIAL");
}
