use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use anyhow::{anyhow, Result};
use tempfile::TempDir;

fn checkbook(ledger: &Path, arguments: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_checkbook");

    Ok(Command::new(binary_path)
        .arg("--ledger")
        .arg(ledger)
        .args(arguments)
        .env_remove("CHECKBOOK_LEDGER")
        .output()?)
}

fn stdout_of(ledger: &Path, arguments: &[&str]) -> Result<String> {
    let output = checkbook(ledger, arguments)?;

    if !output.status.success() {
        return Err(anyhow!("checkbook {:?} failed: {}", arguments, String::from_utf8_lossy(&output.stderr)));
    }

    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_cli_creates_ledger_with_header() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = directory.path().join("ledger.csv");

    assert_eq!(stdout_of(&ledger, &["balance"])?, "Current balance: 0.00\n");
    assert_eq!(fs::read_to_string(&ledger)?, "id,timestamp,category,description,amount\n");

    Ok(())
}

#[test]
fn test_cli_records_and_reports_transactions() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = directory.path().join("ledger.csv");

    stdout_of(&ledger, &["deposit", "--category", "income", "--description", "paycheck for March", "--amount", "1000.00", "--date", "2016-04-03", "--time", "12:43:12"])?;
    stdout_of(&ledger, &["withdraw", "--category", "grocery", "--description", "gum", "--amount", "1.00", "--date", "2016-04-03", "--time", "13:00:00"])?;
    stdout_of(&ledger, &["withdraw", "--category", "child care", "--description", "babysitter for one hour", "--amount", "20.14", "--date", "2016-12-30", "--time", "12:43:12"])?;

    assert_eq!(stdout_of(&ledger, &["balance"])?, "Current balance: 978.86\n");

    let history = stdout_of(&ledger, &["history", "--date", "2016-04-03"])?;
    let mut lines = history.lines();

    assert_eq!(lines.next(), Some("id,timestamp,category,description,amount"));

    for (line, expected_id) in lines.zip(["1", "2"]) {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0], expected_id);
        assert!(fields[1].starts_with("2016-04-03"));

        let _: f64 = fields[4].parse()?;
    }

    assert_eq!(history.lines().count(), 3);

    let stats = stdout_of(&ledger, &["stats"])?;

    assert_eq!(stats, "credits: max=1000.00 min=1000.00 average=1000.00 total=1000.00 count=1\ndebits: max=20.14 min=1.00 average=10.57 total=21.14 count=2\n");

    Ok(())
}

#[test]
fn test_cli_modify_keeps_other_rows_intact() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = directory.path().join("ledger.csv");

    stdout_of(&ledger, &["deposit", "--category", "income", "--description", "pay", "--amount", "50", "--date", "2016-04-03"])?;
    stdout_of(&ledger, &["withdraw", "--category", "food", "--description", "lunch", "--amount", "10", "--date", "2016-04-04"])?;

    let before = fs::read_to_string(&ledger)?;

    stdout_of(&ledger, &["modify", "--id", "2", "--timestamp", "2016-04-05", "--category", "food", "--description", "dinner", "--amount", "12.50"])?;

    let after = fs::read_to_string(&ledger)?;

    assert_eq!(before.lines().take(2).collect::<Vec<_>>(), after.lines().take(2).collect::<Vec<_>>());
    assert_eq!(after.lines().nth(2), Some("2,2016-04-05,food,dinner,-12.50"));
    assert_eq!(stdout_of(&ledger, &["balance"])?, "Current balance: 37.50\n");

    Ok(())
}

#[test]
fn test_cli_rejects_invalid_input() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = directory.path().join("ledger.csv");

    let invalid_amount = checkbook(&ledger, &["deposit", "--category", "income", "--description", "pay", "--amount", "34.586"])?;

    assert!(!invalid_amount.status.success());

    let unknown_id = checkbook(&ledger, &["modify", "--id", "1", "--timestamp", "2016-04-03", "--category", "x", "--description", "y", "--amount", "1.00"])?;

    assert!(!unknown_id.status.success());
    assert!(String::from_utf8(unknown_id.stderr)?.contains("No transaction with id [1]"));

    Ok(())
}

#[test]
fn test_cli_surfaces_corrupt_ledgers() -> Result<()> {
    let directory = TempDir::new()?;
    let ledger = directory.path().join("ledger.csv");
    fs::write(&ledger, "id,timestamp,category,description,amount\n1,2016-04-03,income,pay,lots\n")?;

    let output = checkbook(&ledger, &["balance"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Corrupt record on line [2]"));

    Ok(())
}
