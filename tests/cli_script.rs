use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn script_cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("overview_core_cli").unwrap();
    cmd.env("OVERVIEW_CORE_CLI_SCRIPT", "1")
        .env("OVERVIEW_CORE_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_renders_overview() {
    let home = tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("range\nshow\nexit\n")
        .assert()
        .success()
        .stdout(contains("Selected range: 2024-03-01 to 2024-03-31"))
        .stdout(contains("Workspace ID: RA-12345"))
        .stdout(contains("Rows read"))
        .stdout(contains("5.2GB of 20GB"))
        .stdout(contains("Payments completed"))
        .stdout(contains("vs. last year"));
}

#[test]
fn range_and_period_selection_flow() {
    let home = tempdir().unwrap();
    let export = home.path().join("page.json");
    let input = format!(
        "range 2024-02-01 2024-02-29\nperiod previous-period\nexport {}\nexit\n",
        export.display()
    );

    script_cmd(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Range set to 2024-02-01 to 2024-02-29"))
        .stdout(contains("Comparison period set to previous-period"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(json["charts"][0]["range"]["from"], "2024-02-01");
    assert_eq!(json["charts"][0]["comparisonPeriod"], "previous-period");
}

#[test]
fn invalid_input_is_reported_and_shell_continues() {
    let home = tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("period last-month\nchrat Logins\nchart Login\nrange reset\nexit\n")
        .assert()
        .success()
        .stderr(contains("Invalid comparison period `last-month`"))
        .stdout(contains("Suggestion: `chart`?"))
        .stderr(contains("did you mean `Logins`?"))
        .stdout(contains("Range reset to 2024-03-01 to 2024-03-31"));
}

#[test]
fn config_set_persists_between_runs() {
    let home = tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("config set range-days 7\nexit\n")
        .assert()
        .success()
        .stdout(contains("range-days set to 7"));

    script_cmd(home.path())
        .write_stdin("range\n")
        .assert()
        .success()
        .stdout(contains("Selected range: 2024-03-24 to 2024-03-31"));
}

#[test]
fn oversized_range_days_is_rejected() {
    let home = tempdir().unwrap();
    script_cmd(home.path())
        .write_stdin("config set range-days 100000000\nrange reset\n")
        .assert()
        .success()
        .stderr(contains("range-days must be between 1 and 36600"))
        .stdout(contains("Range reset to 2024-03-01 to 2024-03-31"));
}

#[test]
fn stored_range_days_past_the_calendar_does_not_block_startup() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{"locale":"en-US","currency":"USD","range_days":100000000}"#,
    )
    .unwrap();

    script_cmd(home.path())
        .write_stdin("range\nrange 2024-03-01 2024-03-31\ncharts\n")
        .assert()
        .success()
        .stderr(contains("No date range selected"))
        .stdout(contains("Range set to 2024-03-01 to 2024-03-31"))
        .stdout(contains("Logins"));
}
