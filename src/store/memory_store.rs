use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// Process-lifetime store backed by a map. The optional byte budget covers
/// the sum of all stored values, in the spirit of a browser storage quota.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    max_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_byte_budget(max_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_bytes: Some(max_bytes),
        }
    }

    fn stored_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(budget) = self.max_bytes {
            // the write replaces the old value, so it doesn't count
            if self.stored_bytes_without(key) + value.len() > budget {
                return Err(StoreError::CapacityExceeded);
            }
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
