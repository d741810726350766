use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally_core_cli").unwrap();
    cmd.env("TALLY_CORE_CLI_SCRIPT", "1")
        .env("TALLY_CORE_HOME", home.path());
    cmd
}

#[test]
fn records_and_summarizes_a_transaction() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add income Salary 1000\nsummary\nlist\nexit\n")
        .assert()
        .success()
        .stdout(contains("Recorded income of $1000.00 in Salary."))
        .stdout(contains("Total Income"))
        .stdout(contains("$1000.00"))
        .stdout(contains("[#1]"));
}

#[test]
fn deleting_reverses_the_totals() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add income Salary 1000\nadd expense Groceries 40\ndelete 2\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Removed expense of $40.00 in Groceries."))
        .stdout(contains("Current Balance: $1000.00"));
}

#[test]
fn state_persists_across_runs() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add income Salary 1000\nexit\n")
        .assert()
        .success();
    cli(&home)
        .write_stdin("summary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Total Income:    $1000.00"));
}

#[test]
fn invalid_submissions_change_nothing() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add expense Groceries abc\nadd expense Groceries 0\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Please enter an amount greater than 0."))
        .stdout(contains("Total Expenses:  $0.00"));
}

#[test]
fn clear_resets_everything() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add income Salary 1000\nadd expense Rent 500\nclear --yes\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("All transactions cleared."))
        .stdout(contains("Current Balance: $0.00"));
}

#[test]
fn clear_without_the_flag_is_refused_in_script_mode() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add income Salary 10\nclear\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Confirmation is required"))
        .stdout(contains("Total Income:    $10.00"));
}

#[test]
fn filter_toggles_on_and_off() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin(
            "add expense Groceries 20\nadd expense Rent 500\nfilter Rent\nfilter Rent\nexit\n",
        )
        .assert()
        .success()
        .stdout(contains("Filtering: Rent"))
        .stdout(contains("Showing all transactions."));
}

#[test]
fn chart_lists_expense_categories_with_shares() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("add expense Groceries 25\nadd expense Rent 75\nchart\nexit\n")
        .assert()
        .success()
        .stdout(contains("Spending by Category"))
        .stdout(contains("(25.0%)"))
        .stdout(contains("(75.0%)"));
}

#[test]
fn config_changes_take_effect_and_persist() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("config currency £\nadd income Salary 5\nexit\n")
        .assert()
        .success()
        .stdout(contains("Currency symbol set to `£`."))
        .stdout(contains("Recorded income of £5.00 in Salary."));
    cli(&home)
        .write_stdin("config\nexit\n")
        .assert()
        .success()
        .stdout(contains("currency  £"));
}

#[test]
fn unknown_commands_suggest_a_fix() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("fitler Rent\nexit\n")
        .assert()
        .success()
        .stdout(contains("Did you mean `filter`?"));
}
