//! End-to-end tests for the yieldrank binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary with the user config directory pointed at `home`.
fn yieldrank(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yieldrank").unwrap();
    cmd.env_remove("YIELDRANK_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn analyze_reference_bond_table() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args([
            "analyze", "--face", "1000", "--price", "950", "--coupon", "5", "--tax", "20",
            "--years", "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.1932%"))
        .stdout(predicate::str::contains("5.1600%"))
        .stdout(predicate::str::contains("4.53"));
}

#[test]
fn analyze_json_output() {
    let home = TempDir::new().unwrap();
    let output = yieldrank(&home)
        .args([
            "analyze", "-f", "json", "--price", "950", "--coupon", "5", "--tax", "20", "--years",
            "5", "--cashflows",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ytm = report["metrics"]["ytm"].as_f64().unwrap();
    assert!((ytm - 0.061_932_3).abs() < 1e-4);
    let ratio = report["metrics"]["ytm_duration_ratio"].as_f64().unwrap();
    assert!((ratio - 0.011_384_5).abs() < 1e-4);
    assert_eq!(report["cashflows"]["flows"].as_array().unwrap().len(), 5);
}

#[test]
fn analyze_rejects_non_positive_price() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args(["analyze", "--price", "0", "--years", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price"));
}

#[test]
fn analyze_reports_infeasible_price() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args(["analyze", "--face", "100", "--price", "20000", "--years", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("converge"));
}

#[test]
fn compare_inline_bonds_minimal() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args([
            "compare", "-f", "minimal", "--tax", "20", "--bond", "LONG:1000:900:4:20", "--bond",
            "SHORT:1000:980:5:2", "--bond", "MID:1000:950:5:5",
        ])
        .assert()
        .success()
        .stdout("SHORT\nMID\nLONG\n");
}

#[test]
fn compare_from_json_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bonds.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "A", "face_value": 1000, "price": 950, "coupon_rate": 0.05, "tax_rate": 0.2, "years_to_maturity": 5},
            {"id": "B", "face_value": 1000, "price": 980, "coupon_rate": 0.05, "tax_rate": 0.2, "years_to_maturity": 2}
        ]"#,
    )
    .unwrap();

    let output = yieldrank(&home)
        .args(["compare", "-f", "json", "--file"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranked = result["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["id"], "B");
    assert_eq!(ranked[0]["rank"], 1);
    assert!(result["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn compare_rejects_oversized_batch() {
    let home = TempDir::new().unwrap();
    let mut cmd = yieldrank(&home);
    cmd.arg("compare");
    for i in 0..21 {
        cmd.arg("--bond").arg(format!("B{i}:1000:950:5:5"));
    }
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("20"));
}

#[test]
fn compare_rejects_malformed_inline_bond() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args(["compare", "--bond", "A:1000:950"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name:face:price:coupon_pct:years"));
}

#[test]
fn schedule_minimal() {
    let home = TempDir::new().unwrap();
    yieldrank(&home)
        .args(["schedule", "-f", "minimal", "--coupon", "5", "--years", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 1050"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested").join("config.toml");

    yieldrank(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    yieldrank(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    yieldrank(&home)
        .args(["config", "show", "-f", "json", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_iterations\": 100"));
}

#[test]
fn config_file_changes_tax_treatment() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(&path, "tax_treatment = \"ScaledYield\"\n").unwrap();

    let output = yieldrank(&home)
        .args([
            "analyze", "-f", "json", "--price", "1000", "--coupon", "4", "--tax", "25", "--years",
            "10", "--config",
        ])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let after_tax = report["metrics"]["ytm_after_tax"].as_f64().unwrap();
    assert!((after_tax - 0.03).abs() < 1e-4);
}
