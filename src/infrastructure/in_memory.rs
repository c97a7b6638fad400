use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{PaymentError, Result};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// An in-memory account table keyed by [`AccountId`].
///
/// Ordered by id so reports come out in a stable order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: BTreeMap<AccountId, Account>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn insert(&mut self, account: Account) -> Result<()> {
        match self.accounts.entry(account.id()) {
            Entry::Occupied(_) => Err(PaymentError::DuplicateAccount(account.id())),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    fn accounts(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }
}
