use thiserror::Error;

pub mod file_store;
pub mod memory_store;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store capacity exceeded")]
    CapacityExceeded,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A synchronous string key/value store.
///
/// `get` returns `None` for a key that was never written. `set` overwrites
/// unconditionally; there are no partial writes to reason about, a failed
/// `set` leaves the previous value in place.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
