mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_malformed_rows_are_skipped() {
    let accounts = common::csv_file(&[
        "id, name, balance",
        "1, Alice, 100",
        // duplicate id
        "1, Impostor, 999",
        // negative balance
        "2, Overdrawn, -5",
        "3, Bob, 0",
    ]);
    let transactions = common::csv_file(&[
        "id, amount, sender, recipient, method",
        // not a number
        "one, 10, 1, 3, D",
        // zero amount
        "2, 0, 1, 3, D",
        "3, 10, 1, 3, D",
    ]);

    let mut cmd = Command::new(cargo_bin!("strata-ledger"));
    cmd.arg("--accounts")
        .arg(accounts.path())
        .arg("--transactions")
        .arg(transactions.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading account"))
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Error reading transaction"))
        .stdout(predicate::eq(
            "id,name,balance,transactions\n1,Alice,90,1\n3,Bob,10,1\n",
        ));
}

#[test]
fn test_boundary_identifiers() {
    let accounts = common::csv_file(&["id, name, balance", "0, Zero, 1000", "255, Max, 0"]);
    let transactions = common::csv_file(&[
        "id, amount, sender, recipient, method",
        "255, 100, 0, 255, C",
    ]);

    let mut cmd = Command::new(cargo_bin!("strata-ledger"));
    cmd.arg("--accounts")
        .arg(accounts.path())
        .arg("--transactions")
        .arg(transactions.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0,Zero,890,1"))
        .stdout(predicate::str::contains("255,Max,110,1"));
}
