use super::account::{AccountId, Amount, Balance};
use super::ports::AccountStore;
use super::settlement::SettlementStrategy;
use crate::error::{HandlerError, SettlementError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u8);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The recognized payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "C")]
    Credit,
    #[serde(rename = "D")]
    Debit,
    #[serde(rename = "S")]
    Cash,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "C",
            PaymentMethod::Debit => "D",
            PaymentMethod::Cash => "S",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = HandlerError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "C" => Ok(PaymentMethod::Credit),
            "D" => Ok(PaymentMethod::Debit),
            "S" => Ok(PaymentMethod::Cash),
            other => Err(HandlerError::NotFound {
                code: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The payment method code a transaction was created with.
///
/// Kept as raw text so input naming an unknown method can still be represented
/// as a transaction; it is only interpreted during handler selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethodCode(String);

impl PaymentMethodCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PaymentMethod> for PaymentMethodCode {
    fn from(method: PaymentMethod) -> Self {
        Self(method.code().to_string())
    }
}

impl fmt::Display for PaymentMethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionState {
    #[default]
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "E")]
    Expired,
    #[serde(rename = "C")]
    Closed,
}

/// A transfer of value from `sender` to `recipient`.
///
/// Accounts are referenced by id and resolved through an [`AccountStore`] at
/// settlement time, so a transaction never borrows the accounts it moves value
/// between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    amount: Amount,
    sender: AccountId,
    recipient: AccountId,
    state: TransactionState,
    payment_method: PaymentMethodCode,
    handler: Option<SettlementStrategy>,
    settled: Option<Balance>,
}

impl Transaction {
    /// Creates an open transaction with no handler bound.
    pub fn new(
        id: TransactionId,
        amount: Amount,
        sender: AccountId,
        recipient: AccountId,
        payment_method: impl Into<PaymentMethodCode>,
    ) -> Self {
        Self {
            id,
            amount,
            sender,
            recipient,
            state: TransactionState::Open,
            payment_method: payment_method.into(),
            handler: None,
            settled: None,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn requested_amount(&self) -> Amount {
        self.amount
    }

    pub fn sender(&self) -> AccountId {
        self.sender
    }

    pub fn recipient(&self) -> AccountId {
        self.recipient
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn payment_method(&self) -> &PaymentMethodCode {
        &self.payment_method
    }

    pub fn handler(&self) -> Option<SettlementStrategy> {
        self.handler
    }

    /// The amount that actually moved, once the transaction is closed.
    pub fn settled_amount(&self) -> Option<Balance> {
        self.settled
    }

    /// Binds the settlement strategy matching this transaction's payment method.
    ///
    /// Calling it again rebinds the same strategy. On an unrecognized method the
    /// bound strategy is left untouched.
    pub fn select_handler(&mut self) -> Result<(), HandlerError> {
        let method: PaymentMethod = self.payment_method.as_str().parse()?;
        self.handler = Some(SettlementStrategy::for_method(method));
        Ok(())
    }

    /// Settles the transaction with its bound strategy against `accounts`.
    pub fn make_payment<S>(&mut self, accounts: &mut S) -> Result<(), SettlementError>
    where
        S: AccountStore + ?Sized,
    {
        let strategy = self.handler.ok_or(SettlementError::StrategyNotBound)?;
        strategy.pay(self, accounts)
    }

    /// Moves an open transaction to `Expired`. Expiring twice is a no-op.
    pub fn expire(&mut self) -> Result<(), SettlementError> {
        match self.state {
            TransactionState::Closed => Err(SettlementError::AlreadyClosed),
            TransactionState::Open | TransactionState::Expired => {
                self.state = TransactionState::Expired;
                Ok(())
            }
        }
    }

    pub(crate) fn close(&mut self, settled: Balance) {
        self.state = TransactionState::Closed;
        self.settled = Some(settled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(method: impl Into<PaymentMethodCode>) -> Transaction {
        Transaction::new(
            TransactionId(1),
            Amount::new(55).unwrap(),
            AccountId(1),
            AccountId(2),
            method,
        )
    }

    #[test]
    fn test_new_transaction_is_open_and_unbound() {
        let tx = transaction(PaymentMethod::Cash);
        assert_eq!(tx.state(), TransactionState::Open);
        assert_eq!(tx.handler(), None);
        assert_eq!(tx.settled_amount(), None);
        assert_eq!(tx.payment_method().as_str(), "S");
    }

    #[test]
    fn test_select_handler_per_method() {
        for (method, expected) in [
            (PaymentMethod::Credit, SettlementStrategy::Credit),
            (PaymentMethod::Debit, SettlementStrategy::Debit),
            (PaymentMethod::Cash, SettlementStrategy::Cash),
        ] {
            let mut tx = transaction(method);
            tx.select_handler().unwrap();
            assert_eq!(tx.handler(), Some(expected));

            // Rebinding is allowed
            tx.select_handler().unwrap();
            assert_eq!(tx.handler(), Some(expected));
        }
    }

    #[test]
    fn test_select_handler_unrecognized_method() {
        let mut tx = transaction(PaymentMethodCode::new("X"));
        let err = tx.select_handler().unwrap_err();
        assert_eq!(
            err,
            HandlerError::NotFound {
                code: "X".to_string()
            }
        );
        assert_eq!(tx.handler(), None);
    }

    #[test]
    fn test_method_codes_are_case_sensitive() {
        assert!("c".parse::<PaymentMethod>().is_err());
        assert_eq!("C".parse::<PaymentMethod>(), Ok(PaymentMethod::Credit));
    }

    #[test]
    fn test_expire_transitions() {
        let mut tx = transaction(PaymentMethod::Debit);
        tx.expire().unwrap();
        assert_eq!(tx.state(), TransactionState::Expired);
        tx.expire().unwrap();
        assert_eq!(tx.state(), TransactionState::Expired);

        let mut closed = transaction(PaymentMethod::Debit);
        closed.close(Balance::new(55));
        assert_eq!(closed.expire(), Err(SettlementError::AlreadyClosed));
        assert_eq!(closed.state(), TransactionState::Closed);
    }

    #[test]
    fn test_state_and_method_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionState::Expired).unwrap(),
            "\"E\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            "\"S\""
        );
        let method: PaymentMethod = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(method, PaymentMethod::Debit);
    }
}
