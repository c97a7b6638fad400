use super::transaction::TransactionId;
use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-unique identity of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u8);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Funds held by an account, in the smallest currency unit.
///
/// Unsigned by construction, so a balance can never go negative. All arithmetic
/// is checked and returns `None` instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Balance(pub u64);

impl Balance {
    pub const ZERO: Self = Self(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A requested transaction amount. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Amount(u32);

impl Amount {
    pub fn new(units: u32) -> Result<Self, PaymentError> {
        if units > 0 {
            Ok(Self(units))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Amount {
    type Error = PaymentError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Amount> for u32 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(u64::from(amount.0))
    }
}

/// An account in the ledger.
///
/// The balance is only ever changed by settling a transaction in which this
/// account is the sender or the recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Balance,
    transactions: Vec<TransactionId>,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, initial_balance: Balance) -> Self {
        Self {
            id,
            name: name.into(),
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Transactions settled against this account, oldest first.
    pub fn transactions(&self) -> &[TransactionId] {
        &self.transactions
    }

    /// Applies an already validated balance and records the transaction.
    pub(crate) fn commit(&mut self, balance: Balance, tx: TransactionId) {
        self.balance = balance;
        self.transactions.push(tx);
    }
}
