mod common;

use assert_cmd::Command;
use common::{write_csv, SAMPLE_CSV};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn menu_lists_analyses_and_exits() {
    let dir = tempdir().expect("temp dir");
    let path = write_csv(&dir, "sales.csv", SAMPLE_CSV);

    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg(&path)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(
            contains("Loaded 4 sales records")
                .and(contains("Select Analysis Type"))
                .and(contains("[5] Sales Distribution Analysis")),
        );
}

#[test]
fn product_preference_prints_ranked_totals() {
    let dir = tempdir().expect("temp dir");
    let path = write_csv(&dir, "sales.csv", SAMPLE_CSV);

    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg(&path)
        .write_stdin("4\n0\n")
        .assert()
        .success()
        .stdout(contains("Product Preference Analysis").and(contains("370.00")));
}

#[test]
fn monthly_sales_prompts_for_a_branch_id() {
    let dir = tempdir().expect("temp dir");
    let path = write_csv(&dir, "sales.csv", SAMPLE_CSV);

    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg(&path)
        .write_stdin("1\n2\n0\n")
        .assert()
        .success()
        .stdout(contains("Enter branch ID:").and(contains("120.00")));
}

#[test]
fn report_errors_keep_the_menu_running() {
    let dir = tempdir().expect("temp dir");
    let path = write_csv(&dir, "sales.csv", SAMPLE_CSV);

    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg(&path)
        .write_stdin("1\n42\n0\n")
        .assert()
        .success()
        .stdout(
            contains("Error: error generating the monthly sales report")
                .and(contains("Exiting the program.")),
        );
}

#[test]
fn invalid_menu_choices_reprompt() {
    let dir = tempdir().expect("temp dir");
    let path = write_csv(&dir, "sales.csv", SAMPLE_CSV);

    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg(&path)
        .write_stdin("9\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice"));
}

#[test]
fn missing_file_fails_before_any_report_can_run() {
    Command::cargo_bin("sales_report")
        .expect("binary exists")
        .arg("no_such_sales_data.csv")
        .assert()
        .failure()
        .stderr(contains("Initialization error").and(contains("does not exist")));
}
