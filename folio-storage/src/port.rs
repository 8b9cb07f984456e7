use folio_error::Result;

/// Capability over an origin-scoped key-value string store.
///
/// Every slot holds one serialized document; writes replace the whole value.
/// Keeping the console behind this seam makes the persistence mechanism
/// swappable and testable without touching the filesystem.
pub trait StoragePort {
    /// Fetch the raw serialized value for `key`, `None` if the slot was
    /// never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key` wholesale.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop the slot. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<P: StoragePort + ?Sized> StoragePort for &mut P {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
