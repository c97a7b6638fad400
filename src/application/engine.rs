use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use crate::infrastructure::in_memory::InMemoryAccountStore;
use tracing::{debug, info, warn};

/// Drives transactions through handler selection and payment.
///
/// `PaymentEngine` owns the account table and settles one transaction at a
/// time, which keeps the balance check and the balance update of a settlement
/// from interleaving with another settlement.
pub struct PaymentEngine<S: AccountStore = InMemoryAccountStore> {
    accounts: S,
}

impl Default for PaymentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentEngine {
    /// Creates an engine backed by an empty in-memory account table.
    pub fn new() -> Self {
        Self {
            accounts: InMemoryAccountStore::new(),
        }
    }
}

impl<S: AccountStore> PaymentEngine<S> {
    pub fn with_store(accounts: S) -> Self {
        Self { accounts }
    }

    /// Registers an account with its initial balance.
    pub fn open_account(&mut self, account: Account) -> Result<()> {
        let (id, balance) = (account.id(), account.balance());
        self.accounts.insert(account)?;
        debug!(account = %id, %balance, "account opened");
        Ok(())
    }

    /// Selects the handler for `tx` and pays it.
    ///
    /// The transaction is updated in place, so the caller can inspect its
    /// final state whatever the outcome.
    pub fn submit(&mut self, tx: &mut Transaction) -> Result<()> {
        if let Err(err) = tx.select_handler() {
            warn!(tx = %tx.id(), method = %tx.payment_method(), error = %err, "handler selection failed");
            return Err(PaymentError::from(err));
        }
        debug!(tx = %tx.id(), handler = ?tx.handler(), "handler bound");

        match tx.make_payment(&mut self.accounts) {
            Ok(()) => {
                info!(
                    tx = %tx.id(),
                    sender = %tx.sender(),
                    recipient = %tx.recipient(),
                    requested = tx.requested_amount().value(),
                    settled = ?tx.settled_amount(),
                    "transaction settled"
                );
                Ok(())
            }
            Err(err) => {
                warn!(tx = %tx.id(), error = %err, "transaction rejected");
                Err(PaymentError::from(err))
            }
        }
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// All accounts, ordered by id.
    pub fn accounts(&self) -> Vec<&Account> {
        self.accounts.accounts()
    }

    /// Consumes the engine and hands back the account table.
    pub fn into_store(self) -> S {
        self.accounts
    }
}
