//! E2E tests for the report, validate and schema commands

use std::process::Command;

/// Test the formatted text report against a known scenario
#[test]
fn report_text_output() {
    let output = Command::new("cargo")
        .args(["run", "--", "report", "-i", "tests/data/sample.json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    // Verify the command succeeded
    assert!(output.status.success(), "Command failed: {:?}", output);

    // Verify key sections are present in output
    assert!(stdout.contains("TAX REPORT FY 2024-25"));
    assert!(stdout.contains("SALARY"));
    assert!(stdout.contains("HOUSE PROPERTY"));
    assert!(stdout.contains("TAX COMPUTATION"));

    // Salary figures
    assert!(stdout.contains("₹1250000.00"));
    assert!(stdout.contains("₹90000.00"));

    // Property breakdown row values
    assert!(stdout.contains("Property 1"));
    assert!(stdout.contains("Let-out"));
    assert!(stdout.contains("230000.00"));
    assert!(stdout.contains("69000.00"));
    assert!(stdout.contains("111000.00"));

    // Comparison verdict
    assert!(stdout.contains("New Regime is better. You save ₹52520.00"));
}

/// Test JSON report output with exact regime totals
#[test]
fn report_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/sample.json",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");

    assert_eq!(data["financial_year"], "2024-25");
    assert_eq!(data["residential_status"], "Resident");
    assert_eq!(data["age_bracket"], "<60");
    assert_eq!(data["gross_salary"], "1250000.00");
    assert_eq!(data["hra_exemption"], "90000.00");
    assert_eq!(data["total_house_income"], "111000.00");

    assert_eq!(data["old_regime"]["taxable_income"], "1073000.00");
    assert_eq!(data["old_regime"]["slab_tax"], "134400.00");
    assert_eq!(data["old_regime"]["special_rate_tax"], "12500.00");
    assert_eq!(data["old_regime"]["rebate"], "0.00");
    assert_eq!(data["old_regime"]["total_tax"], "152776.00");

    assert_eq!(data["new_regime"]["taxable_income"], "1226000.00");
    assert_eq!(data["new_regime"]["slab_tax"], "83900.00");
    assert_eq!(data["new_regime"]["total_tax"], "100256.00");

    assert_eq!(data["winner"], "New");
    assert_eq!(data["savings"], "52520.00");
}

/// Test the per-property CSV export
#[test]
fn report_csv_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "report",
            "-i",
            "tests/data/sample.json",
            "--csv",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);

    // Verify CSV header
    assert!(stdout.contains("property,kind,nav,standard_deduction,loan_interest,income"));

    // Verify the let-out breakdown row
    assert!(stdout.contains("Property 1,Let-out,230000.00,69000.00,50000.00,111000.00"));
}

/// Test that clean inputs validate without issues
#[test]
fn validate_clean_inputs() {
    let output = Command::new("cargo")
        .args(["run", "--", "validate", "-i", "tests/data/sample.json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No issues found"));
}

/// Test that bad inputs are reported and fail the command
#[test]
fn validate_negative_inputs() {
    let output = Command::new("cargo")
        .args(["run", "--", "validate", "-i", "tests/data/negative.json"])
        .output()
        .expect("Failed to execute command");

    // Exit code 1 when issues are found
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 issue(s) found"));
    assert!(stdout.contains("PropertyCount"));
    assert!(stdout.contains("NegativeAmount"));
    assert!(stdout.contains("salary.basic"));
}

/// Test JSON validation output
#[test]
fn validate_json_output() {
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "validate",
            "-i",
            "tests/data/negative.json",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");

    assert_eq!(data["issue_count"], 2);
    assert_eq!(data["issues"][0]["type"], "PropertyCount");
    assert_eq!(data["issues"][1]["field"], "salary.basic");
}

/// Test that the report command rejects bad inputs
#[test]
fn report_rejects_negative_inputs() {
    let output = Command::new("cargo")
        .args(["run", "--", "report", "-i", "tests/data/negative.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("number of properties must be between 1 and 3"));
}

/// Test the JSON Schema output
#[test]
fn schema_json_schema() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let schema: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON schema");

    assert_eq!(schema["title"], "TaxInputs");
    assert!(stdout.contains("properties"));
    assert!(stdout.contains("age_bracket"));
}

/// Test the CSV header output
#[test]
fn schema_csv_header() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema", "csv-header"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("property,kind,nav,standard_deduction,loan_interest,income"));
}
