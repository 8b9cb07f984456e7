use std::collections::BTreeMap;

use folio_error::Result;

use crate::port::StoragePort;

/// In-memory [`StoragePort`] for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryPort {
    slots: BTreeMap<String, String>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryPort {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}
