use crate::domain::account::{Account, AccountId, Balance};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    id: AccountId,
    name: &'a str,
    balance: Balance,
    transactions: usize,
}

/// Writes final account balances as CSV: `id,name,balance,transactions`.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts<'a, I>(&mut self, accounts: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        for account in accounts {
            self.writer.serialize(AccountRow {
                id: account.id(),
                name: account.name(),
                balance: account.balance(),
                transactions: account.transactions().len(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_accounts() {
        let accounts = vec![
            Account::new(AccountId(1), "My first account", Balance::new(101)),
            Account::new(AccountId(2), "Online store", Balance::new(54)),
        ];

        let mut buffer = Vec::new();
        AccountWriter::new(&mut buffer)
            .write_accounts(&accounts)
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "id,name,balance,transactions\n1,My first account,101,0\n2,Online store,54,0\n"
        );
    }
}
