use crate::domain::account::{AccountId, Balance};
use miette::Diagnostic;
use thiserror::Error;

/// Raised by handler selection when a payment method code maps to no strategy.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("no matching handler for payment method {code:?}")]
    #[diagnostic(
        code(ledger::handler::not_found),
        help("known payment methods are C (credit), D (debit) and S (cash)")
    )]
    NotFound { code: String },
}

/// Settlement failures. None of them are transient; nothing here is retried.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("no strategy bound to the transaction")]
    #[diagnostic(
        code(ledger::settlement::strategy_not_bound),
        help("select a handler before making the payment")
    )]
    StrategyNotBound,
    #[error("one account can't make a transaction to itself")]
    #[diagnostic(code(ledger::settlement::self_transaction))]
    SelfTransaction,
    #[error("can't pay an already closed transaction")]
    #[diagnostic(code(ledger::settlement::already_closed))]
    AlreadyClosed,
    #[error("transaction expired")]
    #[diagnostic(code(ledger::settlement::expired))]
    Expired,
    #[error("insufficient balance: required {required}, available {available}")]
    #[diagnostic(code(ledger::settlement::insufficient_balance))]
    InsufficientBalance { required: Balance, available: Balance },
    #[error("account {0} not found")]
    #[diagnostic(code(ledger::settlement::unknown_account))]
    UnknownAccount(AccountId),
    #[error("effective amount for requested {requested} does not fit a balance")]
    #[diagnostic(code(ledger::settlement::effective_amount_out_of_range))]
    EffectiveAmountOutOfRange { requested: u32 },
    #[error("crediting account {0} would overflow its balance")]
    #[diagnostic(code(ledger::settlement::balance_overflow))]
    BalanceOverflow(AccountId),
}

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    #[diagnostic(code(ledger::csv))]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(ledger::io))]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Handler(#[from] HandlerError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Settlement(#[from] SettlementError),
    #[error("account {0} already exists")]
    #[diagnostic(code(ledger::duplicate_account))]
    DuplicateAccount(AccountId),
    #[error("Validation error: {0}")]
    #[diagnostic(code(ledger::validation))]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
