use super::account::{Account, AccountId};
use crate::error::Result;

/// Indexed storage for accounts. Transactions hold [`AccountId`]s and resolve
/// them here, so accounts can be shared by any number of transactions.
pub trait AccountStore {
    /// Adds a new account. Fails if the id is already taken.
    fn insert(&mut self, account: Account) -> Result<()>;
    fn get(&self, id: AccountId) -> Option<&Account>;
    fn get_mut(&mut self, id: AccountId) -> Option<&mut Account>;
    /// All accounts, ordered by id.
    fn accounts(&self) -> Vec<&Account>;
}
