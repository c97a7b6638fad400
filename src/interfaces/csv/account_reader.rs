use crate::domain::account::{Account, AccountId, Balance};
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of an accounts file: `id,name,balance`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AccountRecord {
    pub id: AccountId,
    pub name: String,
    pub balance: Balance,
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::new(record.id, record.name, record.balance)
    }
}

/// Reads opening account balances from a CSV source.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: super::reader(source),
        }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize::<AccountRecord>()
            .map(|result| result.map(Account::from).map_err(PaymentError::from))
    }
}
