//! Settlement strategies.
//!
//! Every strategy runs the same checks in the same order and differs only in
//! the effective amount it moves:
//!
//! 1. sender and recipient must differ
//! 2. the transaction must not be closed
//! 3. the transaction must not be expired
//! 4. the sender must cover the effective amount
//!
//! On success the effective amount leaves the sender, reaches the recipient
//! unchanged, and the transaction closes. On failure nothing is touched.

use super::account::{Amount, Balance};
use super::ports::AccountStore;
use super::transaction::{PaymentMethod, Transaction, TransactionState};
use crate::error::SettlementError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const CREDIT_SURCHARGE: Decimal = dec!(1.10);
const CASH_DISCOUNT: Decimal = dec!(0.90);

/// The handler bound to a transaction by handler selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementStrategy {
    /// Requested amount plus a 10% surcharge.
    Credit,
    /// Requested amount as is.
    Debit,
    /// Requested amount minus a 10% discount.
    Cash,
}

impl SettlementStrategy {
    pub fn for_method(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Credit => SettlementStrategy::Credit,
            PaymentMethod::Debit => SettlementStrategy::Debit,
            PaymentMethod::Cash => SettlementStrategy::Cash,
        }
    }

    fn rate(&self) -> Decimal {
        match self {
            SettlementStrategy::Credit => CREDIT_SURCHARGE,
            SettlementStrategy::Debit => Decimal::ONE,
            SettlementStrategy::Cash => CASH_DISCOUNT,
        }
    }

    /// The amount this strategy moves for a requested `amount`, truncated
    /// toward zero.
    pub fn effective_amount(&self, amount: Amount) -> Result<Balance, SettlementError> {
        let scaled = (Decimal::from(amount.value()) * self.rate()).floor();
        scaled
            .to_u64()
            .map(Balance::new)
            .ok_or(SettlementError::EffectiveAmountOutOfRange {
                requested: amount.value(),
            })
    }

    /// Validates and settles `tx` against the accounts in `accounts`.
    pub fn pay<S>(&self, tx: &mut Transaction, accounts: &mut S) -> Result<(), SettlementError>
    where
        S: AccountStore + ?Sized,
    {
        if tx.sender() == tx.recipient() {
            return Err(SettlementError::SelfTransaction);
        }

        match tx.state() {
            TransactionState::Closed => return Err(SettlementError::AlreadyClosed),
            TransactionState::Expired => return Err(SettlementError::Expired),
            TransactionState::Open => {}
        }

        let sender = accounts
            .get(tx.sender())
            .ok_or(SettlementError::UnknownAccount(tx.sender()))?;
        let recipient = accounts
            .get(tx.recipient())
            .ok_or(SettlementError::UnknownAccount(tx.recipient()))?;

        let effective = self.effective_amount(tx.requested_amount())?;
        let sender_balance = sender.balance().checked_sub(effective).ok_or(
            SettlementError::InsufficientBalance {
                required: effective,
                available: sender.balance(),
            },
        )?;
        let recipient_balance = recipient
            .balance()
            .checked_add(effective)
            .ok_or(SettlementError::BalanceOverflow(recipient.id()))?;

        // Both sides must be writable before either is touched.
        for id in [tx.sender(), tx.recipient()] {
            if accounts.get_mut(id).is_none() {
                return Err(SettlementError::UnknownAccount(id));
            }
        }
        accounts
            .get_mut(tx.sender())
            .ok_or(SettlementError::UnknownAccount(tx.sender()))?
            .commit(sender_balance, tx.id());
        accounts
            .get_mut(tx.recipient())
            .ok_or(SettlementError::UnknownAccount(tx.recipient()))?
            .commit(recipient_balance, tx.id());
        tx.close(effective);

        Ok(())
    }
}
