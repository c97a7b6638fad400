#![allow(dead_code)]

use std::io::Write;
use strata_ledger::domain::account::{Account, AccountId, Amount, Balance};
use strata_ledger::domain::ports::AccountStore;
use strata_ledger::domain::transaction::{PaymentMethod, Transaction, TransactionId};
use strata_ledger::infrastructure::in_memory::InMemoryAccountStore;
use tempfile::NamedTempFile;

/// Writes `lines` to a temporary CSV file that lives as long as the handle.
pub fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write CSV line");
    }
    file.flush().expect("Failed to flush CSV file");
    file
}

/// Accounts 1 and 2 with the given opening balances.
pub fn two_accounts(sender: u64, recipient: u64) -> InMemoryAccountStore {
    let mut store = InMemoryAccountStore::new();
    store
        .insert(Account::new(AccountId(1), "sender", Balance::new(sender)))
        .unwrap();
    store
        .insert(Account::new(AccountId(2), "recipient", Balance::new(recipient)))
        .unwrap();
    store
}

pub fn transfer(amount: u32, method: PaymentMethod) -> Transaction {
    Transaction::new(
        TransactionId(1),
        Amount::new(amount).unwrap(),
        AccountId(1),
        AccountId(2),
        method,
    )
}

pub fn balance(store: &InMemoryAccountStore, id: u8) -> u64 {
    store.get(AccountId(id)).unwrap().balance().value()
}
