use std::marker::PhantomData;

use folio_error::Result;

use crate::port::StoragePort;
use crate::record::Singleton;

/// Store for a single document without an identifier (profile, about).
/// Saves are wholesale overwrites of the slot.
pub struct SingletonStore<T, P> {
    port: P,
    _marker: PhantomData<T>,
}

impl<T, P> SingletonStore<T, P>
where
    T: Singleton,
    P: StoragePort,
{
    pub fn new(port: P) -> Self {
        Self {
            port,
            _marker: PhantomData,
        }
    }

    /// Read the document. Absent or malformed data yields `None`.
    pub fn load(&self) -> Result<Option<T>> {
        let raw = match self.port.get(T::SLOT)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                log::warn!(
                    "slot `{}` holds malformed data, ignoring: {}",
                    T::SLOT,
                    err
                );
                Ok(None)
            }
        }
    }

    /// Overwrite the stored document.
    pub fn save(&mut self, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.port.set(T::SLOT, &raw)
    }

    pub fn erase(&mut self) -> Result<()> {
        self.port.remove(T::SLOT)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::memory_port::MemoryPort;
    use crate::port::StoragePort;
    use crate::record::Singleton;
    use crate::singleton::SingletonStore;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Motto {
        line: String,
    }

    impl Singleton for Motto {
        const SLOT: &'static str = "motto";
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let mut port = MemoryPort::new();
        let mut store = SingletonStore::<Motto, _>::new(&mut port);

        assert_eq!(store.load().unwrap(), None);
        store
            .save(&Motto {
                line: "less, but better".to_owned(),
            })
            .unwrap();
        assert_eq!(
            store.load().unwrap(),
            Some(Motto {
                line: "less, but better".to_owned()
            })
        );
    }

    #[test]
    fn test_malformed_document_yields_none() {
        let mut port = MemoryPort::new();
        port.set("motto", "not json at all").unwrap();

        let store = SingletonStore::<Motto, _>::new(&mut port);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_erase_clears_slot() {
        let mut port = MemoryPort::new();
        let mut store = SingletonStore::<Motto, _>::new(&mut port);
        store
            .save(&Motto {
                line: "gone".to_owned(),
            })
            .unwrap();
        store.erase().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
