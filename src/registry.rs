use thiserror::Error;
use tracing::debug;

use crate::account::{Account, AccountId};
use crate::store::{KeyValueStore, StoreError};

/// Fixed key the whole account list is persisted under.
pub const ACCOUNTS_KEY: &str = "accounts";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Stored account list is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Ordered in-memory list of accounts, mirrored to a durable key/value store
/// after every mutation.
///
/// The registry is a plain value owned by the caller; construct it once at
/// the application's composition root and pass it around by reference.
pub struct AccountRegistry<S> {
    accounts: Vec<Account>,
    store: S,
}

impl<S> AccountRegistry<S>
where
    S: KeyValueStore,
{
    /// Creates an empty registry on top of `store`. Call [`load`] afterwards
    /// to pick up whatever a previous run persisted.
    ///
    /// [`load`]: AccountRegistry::load
    pub fn new(store: S) -> Self {
        Self {
            accounts: Vec::new(),
            store,
        }
    }

    /// Inserts `account`, or replaces the existing entry with the same `id`
    /// in place, keeping its position.
    ///
    /// The full list is re-persisted on every call. If the store rejects the
    /// write, the in-memory mutation has already applied and the error is
    /// returned to the caller; memory and store are out of sync until the
    /// next successful persist.
    pub fn upsert(&mut self, account: Account) -> Result<(), RegistryError> {
        match self.accounts.iter_mut().find(|acc| acc.id == account.id) {
            Some(slot) => *slot = account,
            None => self.accounts.push(account),
        }
        self.persist()
    }

    /// Removes the first entry with the given `id`, preserving the order of
    /// the rest. Removing an absent id is not an error; the list is
    /// re-persisted either way, exactly as in [`upsert`].
    ///
    /// [`upsert`]: AccountRegistry::upsert
    pub fn remove(&mut self, id: AccountId) -> Result<(), RegistryError> {
        if let Some(idx) = self.accounts.iter().position(|acc| acc.id == id) {
            self.accounts.remove(idx);
        }
        self.persist()
    }

    /// Replaces the in-memory list with whatever the store holds.
    ///
    /// An absent key leaves the current list untouched. Malformed stored
    /// data fails with [`RegistryError::Malformed`] and also leaves the
    /// current list untouched; the registry does not silently fall back to
    /// an empty list.
    pub fn load(&mut self) -> Result<(), RegistryError> {
        let Some(raw) = self.store.get(ACCOUNTS_KEY)? else {
            debug!("no persisted accounts, keeping current list");
            return Ok(());
        };
        self.accounts = serde_json::from_str(&raw)?;
        debug!(count = self.accounts.len(), "accounts loaded");
        Ok(())
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    /// Number of accounts, derived from the list itself.
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn persist(&mut self) -> Result<(), RegistryError> {
        let raw = serde_json::to_string(&self.accounts)?;
        self.store.set(ACCOUNTS_KEY, &raw)?;
        debug!(count = self.accounts.len(), "accounts persisted");
        Ok(())
    }
}
