//! Binary-level tests for the `bizdoctor` command.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LEGAL_FIRM: &str = r#"{
  "company": {
    "company_name": "Smith Law Firm",
    "industry": "legal",
    "employee_count": 45,
    "annual_revenue": 8500000
  },
  "bottlenecks": [
    {
      "name": "Manual client intake",
      "frequency": "weekly",
      "time_impact_hours": 20,
      "cost_impact": 3000,
      "automation_potential": 0.8,
      "solution_complexity": "medium"
    }
  ]
}"#;

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("input.json");
    fs::write(&path, contents).unwrap();
    path
}

fn bizdoctor(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bizdoctor"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is not valid JSON")
}

#[test]
fn test_report_as_json() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    let json = json_stdout(bizdoctor(dir.path()).args(["report", "--format", "json"]).arg(&input));

    assert_eq!(json["company_snapshot"]["name"], "Smith Law Firm");
    assert_eq!(json["key_findings"]["total_inefficiency_hours_annual"], 1040.0);
    assert_eq!(json["recommendation_tier"], "worth_considering");
}

#[test]
fn test_report_as_markdown_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);
    let output = dir.path().join("report.md");

    bizdoctor(dir.path())
        .args(["report", "--format", "markdown", "--output"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let markdown = fs::read_to_string(output).unwrap();
    assert!(markdown.starts_with("# Executive Summary: Smith Law Firm"));
    assert!(markdown.contains("| 1 | Automate Manual client intake | $47,147 | 88.6% | 6.4 months | 100% |"));
}

#[test]
fn test_plain_terminal_report_has_no_escape_codes() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    let output = bizdoctor(dir.path())
        .args(["report", "--plain"])
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("Executive Summary: Smith Law Firm"));
    assert!(text.contains("WORTH CONSIDERING"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_report_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let json = json_stdout(
        bizdoctor(dir.path())
            .args(["report", "--format", "json", "-"])
            .write_stdin(LEGAL_FIRM),
    );
    assert_eq!(json["key_findings"]["number_of_bottlenecks"], 1);
}

#[test]
fn test_config_default_format_applies() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);
    fs::write(
        dir.path().join(".bizdoctor.toml"),
        "[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let json = json_stdout(bizdoctor(dir.path()).arg("report").arg(&input));
    assert_eq!(json["company_snapshot"]["industry"], "legal");
}

#[test]
fn test_portfolio_command() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    let json = json_stdout(bizdoctor(dir.path()).arg("portfolio").arg(&input));

    assert_eq!(json["portfolio_summary"]["number_of_improvements"], 1);
    assert_eq!(json["portfolio_summary"]["total_implementation_cost"], 25000.0);
    assert_eq!(json["individual_projects"].as_array().unwrap().len(), 1);
}

#[test]
fn test_benchmark_and_profile_commands() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    let benchmark = json_stdout(bizdoctor(dir.path()).arg("benchmark").arg(&input));
    assert_eq!(benchmark["performance_rating"], "Average");
    assert_eq!(benchmark["industry_hourly_rate"], 300.0);

    let profile = json_stdout(bizdoctor(dir.path()).arg("profile").arg(&input));
    assert_eq!(profile["company_size_category"], "Small");
    assert_eq!(profile["growth_potential"], "High - Can scale 2-3x with same headcount");
}

#[test]
fn test_annualize_command() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    let json = json_stdout(bizdoctor(dir.path()).arg("annualize").arg(&input));

    assert_eq!(json[0]["annual_hours_impact"], 1040.0);
    assert_eq!(json[0]["annual_cost_impact"], 156000.0);
    assert_eq!(json[0]["priority"], "critical");
}

#[test]
fn test_invalid_input_fails_with_field_paths() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        r#"{"company": {"company_name": "Acme"}, "bottlenecks": [{"name": "", "time_impact_hours": 1, "cost_impact": -3}]}"#,
    );

    let output = bizdoctor(dir.path())
        .arg("portfolio")
        .arg(&input)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("bottlenecks[0].name"), "{stderr}");
    assert!(stderr.contains("bottlenecks[0].cost_impact"), "{stderr}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, LEGAL_FIRM);

    for args in [
        vec!["portfolio"],
        vec!["report", "--format", "markdown"],
        vec!["report", "--format", "json"],
    ] {
        let output = bizdoctor(dir.path())
            .args(&args)
            .args(["--output", "/dev/full"])
            .arg(&input)
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();
        let stderr = String::from_utf8(output).unwrap();
        assert!(stderr.contains("Failed to write"), "{args:?}: {stderr}");
    }
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    bizdoctor(dir.path())
        .args(["report", "does-not-exist.json"])
        .assert()
        .failure();
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    bizdoctor(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".bizdoctor.toml").exists());

    bizdoctor(dir.path()).arg("init").assert().failure();
    bizdoctor(dir.path()).args(["init", "--force"]).assert().success();
}
