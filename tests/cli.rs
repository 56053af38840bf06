//! End-to-end tests for the `expenses` binary
//!
//! Each test runs against its own data directory via the
//! EXPENSE_CLI_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", data_dir.path());
    cmd
}

fn add_expense(data_dir: &TempDir, category: &str, amount: &str) {
    expenses(data_dir)
        .args(["add", "--category", category, "--amount", amount])
        .assert()
        .success();
}

#[test]
fn add_then_list_shows_expense() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args([
            "add",
            "--category",
            "groceries",
            "--amount",
            "50.00",
            "--description",
            "weekly shop",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully"))
        .stdout(predicate::str::contains("- ID: 1"))
        .stdout(predicate::str::contains("'Groceries'"));

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly shop"))
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn add_rejects_invalid_category() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "--category", "food", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid category"))
        .stderr(predicate::str::contains("Groceries"));
}

#[test]
fn add_rejects_out_of_range_amount() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "--category", "health", "--amount", "100001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));
}

#[test]
fn description_defaults_to_placeholder() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["add", "--category", "others", "--amount", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Description: '...'"));
}

#[test]
fn update_changes_one_field() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["update", "--id", "1", "--amount", "75.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("updated successfully"))
        .stdout(predicate::str::contains("New Amount: $50.00 ---> $75.00"));
}

#[test]
fn update_requires_a_field() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["update", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one field"));
}

#[test]
fn delete_missing_id_is_informational() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["delete", "--id", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense found with ID 999"));

    // Record count unchanged
    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn delete_all_with_yes_flag_clears_store() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");
    add_expense(&data_dir, "leisure", "30.00");

    expenses(&data_dir)
        .args(["delete", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 expenses have been deleted"));

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn delete_all_declined_on_stdin_keeps_records() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["delete", "--all"])
        .write_stdin("maybe\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("valid response"))
        .stdout(predicate::str::contains("Deletion cancelled."));

    expenses(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn summary_without_filters_prints_grand_total() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");
    add_expense(&data_dir, "leisure", "30.00");

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: $80.00"));
}

#[test]
fn summary_with_category_filter() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");
    add_expense(&data_dir, "leisure", "30.00");

    expenses(&data_dir)
        .args(["summary", "--category", "leisure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("category 'Leisure': $30.00"));
}

#[test]
fn summary_distinguishes_no_match_from_no_records() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));

    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["summary", "--date", "1999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found for the specified filters."));
}

#[test]
fn summary_category_without_matches_reports_no_match() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args([
            "add",
            "--category",
            "groceries",
            "--amount",
            "50.00",
            "--date",
            "2025-01-07",
        ])
        .assert()
        .success();

    // The month has expenses, just none in the requested category
    expenses(&data_dir)
        .args(["summary", "--date", "2025-01", "--category", "leisure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found for the specified filters."))
        .stdout(predicate::str::contains("$0.00").not());
}

#[test]
fn budget_set_view_and_warning_flow() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["budget", "set", "--date", "2030-01", "--amount", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget of $200.00 set for 2030-01."));

    expenses(&data_dir)
        .args(["budget", "view", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2030-01"))
        .stdout(predicate::str::contains("$200.00"));

    // Exceeding the current month's ceiling warns right after add
    expenses(&data_dir)
        .args(["budget", "set", "--date", &current_month(), "--amount", "10"])
        .assert()
        .success();
    expenses(&data_dir)
        .args(["add", "--category", "electronics", "--amount", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: You have exceeded your monthly budget"));
}

#[test]
fn budget_overwrite_asks_for_confirmation() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["budget", "set", "--date", "2030-01", "--amount", "200"])
        .assert()
        .success();

    // Decline: old value stays
    expenses(&data_dir)
        .args(["budget", "set", "--date", "2030-01", "--amount", "300"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("left at $200.00"));

    // Accept: value replaced
    expenses(&data_dir)
        .args(["budget", "set", "--date", "2030-01", "--amount", "300"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated from $200.00 to $300.00"));
}

#[test]
fn budget_delete_missing_is_informational() {
    let data_dir = TempDir::new().unwrap();

    expenses(&data_dir)
        .args(["budget", "set", "--date", "2030-01", "--amount", "200"])
        .assert()
        .success();

    expenses(&data_dir)
        .args(["budget", "delete", "--date", "2030-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget found for 2030-02."));
}

#[test]
fn export_writes_csv_file() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["export", "--output", "out.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let exported = data_dir.path().join("exports/out.csv");
    let text = std::fs::read_to_string(exported).unwrap();
    assert!(text.starts_with("ID,Date,Amount,Category,Description"));
    assert!(text.contains("Groceries"));
}

#[test]
fn export_rejects_unsupported_format() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");

    expenses(&data_dir)
        .args(["export", "--output", "out.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
}

#[test]
fn list_with_amount_range() {
    let data_dir = TempDir::new().unwrap();
    add_expense(&data_dir, "groceries", "50.00");
    add_expense(&data_dir, "leisure", "30.00");
    add_expense(&data_dir, "health", "80.00");

    expenses(&data_dir)
        .args(["list", "--min", "40", "--max", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("Filtered Expenses"))
        .stdout(predicate::str::contains("$30.00").not());
}

fn current_month() -> String {
    use chrono::Datelike;
    let today = chrono::Local::now().date_naive();
    format!("{}-{:02}", today.year(), today.month())
}
