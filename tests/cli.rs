use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kakeibo(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo").unwrap();
    cmd.env("KAKEIBO_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_dashboard_for_seed_month() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Score: 95 / 100 (Grade A)"))
        .stdout(predicate::str::contains(
            "[SUCCESS] On track! ¥44,650 left in the Food budget.",
        ))
        .stdout(predicate::str::contains("¥247,750 projected"));
}

#[test]
fn test_no_subcommand_shows_dashboard() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Score: 95 / 100"));
}

#[test]
fn test_dashboard_json() {
    let dir = TempDir::new().unwrap();
    let output = kakeibo(&dir)
        .args(["dashboard", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"]["score"], 95);
    assert_eq!(json["goals"].as_array().unwrap().len(), 5);
    assert_eq!(json["forecast"]["current_balance"], 276_650);
}

#[test]
fn test_dashboard_with_quick_entry() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["dashboard", "--add", "5000:entertainment"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Score: 90 / 100 (Grade A)"))
        .stdout(predicate::str::contains("2 categories are over budget"));
}

#[test]
fn test_add_records_and_rescores() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["add", "980", "cafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded:"))
        .stdout(predicate::str::contains("¥980"))
        .stdout(predicate::str::contains("Budget Score: 95 / 100"));
}

#[test]
fn test_add_zero_amount_fails() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["add", "0", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction input"));
}

#[test]
fn test_add_negative_amount_fails() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["add", "-500", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction input"));
}

#[test]
fn test_add_unknown_category_fails() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["add", "500", "travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: travel"));
}

#[test]
fn test_transactions_by_category() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["transactions", "--category", "transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commuter pass"))
        .stdout(predicate::str::contains("4 transaction(s), total ¥18,000"))
        .stdout(predicate::str::contains("Supermarket").not());
}

#[test]
fn test_transactions_from_csv() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("november.csv");
    std::fs::write(
        &csv,
        "date,description,amount,category\n11/1,Rent,80000,home\n11/3,Lunch,1200,food\n",
    )
    .unwrap();

    kakeibo(&dir)
        .arg("transactions")
        .arg("--transactions")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("2 transaction(s), total ¥81,200"));
}

#[test]
fn test_invalid_csv_reports_line() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("bad.csv");
    std::fs::write(&csv, "date,description,amount,category\n11/1,Lunch,abc,food\n").unwrap();

    kakeibo(&dir)
        .arg("dashboard")
        .arg("--transactions")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_categories() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("Food (primary) - target ¥60,000"));
}

#[test]
fn test_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    kakeibo(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"))
        .stdout(predicate::str::contains("¥320,000"));
}

#[test]
fn test_settings_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "highlight_count": 2, "currency_symbol": "JPY " }"#,
    )
    .unwrap();

    kakeibo(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Spending (top 2)"))
        .stdout(predicate::str::contains("JPY 44,650"));
}

#[test]
fn test_invalid_settings_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "period": { "elapsed_days": 0 } }"#,
    )
    .unwrap();

    kakeibo(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_quick_entry_too_large_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    kakeibo(&dir)
        .args(["dashboard", "--add", "1e19:food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid transaction input"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_shorter_period_ends_trend_on_projection() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "period": { "remaining_days": 7 } }"#,
    )
    .unwrap();

    let output = kakeibo(&dir)
        .args(["dashboard", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = json["forecast"]["points"].as_array().unwrap();
    let last = points.last().unwrap();
    assert_eq!(last["label"], "11/30");
    assert_eq!(last["value"]["predicted"], json["forecast"]["projected_balance"]);
    assert_eq!(json["forecast"]["projected_balance"], 259_792);
}
