use crate::domain::account::{AccountId, Amount};
use crate::domain::transaction::{PaymentMethodCode, Transaction, TransactionId};
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a transactions file: `id,amount,sender,recipient,method`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub amount: Amount,
    pub sender: AccountId,
    pub recipient: AccountId,
    pub method: PaymentMethodCode,
}

impl From<TransactionRecord> for Transaction {
    fn from(record: TransactionRecord) -> Self {
        Transaction::new(
            record.id,
            record.amount,
            record.sender,
            record.recipient,
            record.method,
        )
    }
}

/// Reads transactions from a CSV source.
///
/// Rows are deserialized lazily; each yields either an open [`Transaction`]
/// or the error that made the row unreadable.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: super::reader(source),
        }
    }

    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction>> {
        self.reader
            .into_deserialize::<TransactionRecord>()
            .map(|result| result.map(Transaction::from).map_err(PaymentError::from))
    }
}
