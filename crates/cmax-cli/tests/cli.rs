//! End-to-end tests of the `cmax` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmax() -> Command {
    let mut cmd = Command::cargo_bin("cmax").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("CMAX_CONFIG");
    cmd
}

#[test]
fn calc_at_a_given_rate() {
    cmax()
        .args(["calc", "--rate", "4.5", "--principal", "10000", "--years", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12461.82"));
}

#[test]
fn calc_needs_a_bond_or_a_rate() {
    cmax()
        .arg("calc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bond or --rate"));
}

#[test]
fn calc_rejects_negative_principal() {
    cmax()
        .args(["calc", "--rate", "4.5", "--principal=-100"])
        .assert()
        .failure();
}

#[test]
fn compare_picks_the_higher_coupon() {
    cmax()
        .args(["compare", "--left", "CMAX-2022-002", "--right", "CMAX-2022-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bono CMAX Corporativo 2022 leads"));
}

#[test]
fn compare_refuses_the_same_bond_twice() {
    cmax()
        .args(["compare", "--left", "CMAX-2022-001", "--right", "CMAX-2022-001"])
        .assert()
        .failure();
}

#[test]
fn simulate_default_scenarios_as_json() {
    let output = cmax()
        .args(["--format", "json", "simulate"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["risk_tier"], "low");
    assert_eq!(value["outcomes"].as_array().unwrap().len(), 3);
    let expected = value["expected_value"].as_f64().unwrap();
    assert!((expected - 78_552.39).abs() < 0.01);
}

#[test]
fn simulate_rejects_weights_not_summing_to_100() {
    cmax()
        .args(["simulate", "--weights", "30,50,30"])
        .assert()
        .failure();
}

#[test]
fn portfolio_shows_demo_holdings() {
    cmax()
        .arg("portfolio")
        .assert()
        .success()
        .stdout(predicate::str::contains("CMAX-2022-001"))
        .stdout(predicate::str::contains("CMAX-2022-002"));
}

#[test]
fn portfolio_replays_trades_and_reports_rejections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"side": "buy", "bond_id": "CMAX-2022-001", "quantity": 10}},
            {{"side": "sell", "bond_id": "CMAX-2022-001", "quantity": 61}},
            {{"side": "sell", "bond_id": "CMAX-2022-002", "quantity": 25}}
        ]"#
    )
    .unwrap();

    let output = cmax()
        .args(["--format", "json", "portfolio", "--trades"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["holdings"].as_array().unwrap().len(), 1);
    assert_eq!(value["holdings"][0]["quantity"], 60);
    assert_eq!(value["summary"]["holdings_count"], 1);

    let rejected = value["rejected"].as_array().unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0]["index"], 1);
}

#[test]
fn portfolio_with_unreadable_trades_file_fails() {
    cmax()
        .args(["portfolio", "--trades", "/nonexistent/trades.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read trades"));
}

#[test]
fn config_file_changes_fallback_price() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmax.toml");
    std::fs::write(&path, "fallback_price = 900.0\n").unwrap();

    let output = cmax()
        .args(["--format", "json", "portfolio", "--empty", "--config"])
        .arg(&path)
        .arg("--trades")
        .arg({
            let trades = dir.path().join("trades.json");
            std::fs::write(
                &trades,
                r#"[{"side": "buy", "bond_id": "XS-UNKNOWN", "quantity": 2}]"#,
            )
            .unwrap();
            trades
        })
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["holdings"][0]["avg_cost"].as_f64(), Some(900.0));
    assert_eq!(value["summary"]["total_value"].as_f64(), Some(1800.0));
}
