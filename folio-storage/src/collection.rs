use folio_error::{FolioError, Result};

use crate::port::StoragePort;
use crate::record::{fresh_id, Record};

/// Generic read-modify-write CRUD cycle over one slot of a [`StoragePort`].
///
/// The stored value is the full JSON-encoded sequence; every mutation
/// rewrites it wholesale. Between loads the in-memory copy is the
/// authoritative view. Two writers over the same slot are last-write-wins.
pub struct CollectionStore<T, P> {
    port: P,
    records: Vec<T>,
}

impl<T, P> CollectionStore<T, P>
where
    T: Record,
    P: StoragePort,
{
    /// Open the store and read the current sequence from the port.
    pub fn new(port: P) -> Result<Self> {
        let mut store = Self {
            port,
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the slot. An absent or malformed value degrades to an empty
    /// sequence instead of failing.
    pub fn load(&mut self) -> Result<&[T]> {
        self.records = match self.port.get(T::SLOT)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(err) => {
                    log::warn!(
                        "slot `{}` holds malformed data, starting empty: {}",
                        T::SLOT,
                        err
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(&self.records)
    }

    /// The current sequence, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Append `record` under a fresh identifier and persist. Refused when
    /// the entity's required-field predicate fails. Returns the assigned id.
    pub fn add(&mut self, mut record: T) -> Result<String> {
        if !record.is_complete() {
            return Err(FolioError::Validation(T::SLOT.to_owned()));
        }
        let id = fresh_id();
        record.assign_id(id.clone());
        self.records.push(record);
        self.save()?;
        Ok(id)
    }

    /// Drop the record with `id` and persist. A missing id is a no-op, not
    /// an error; the survivors keep their relative order.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == before {
            return Ok(());
        }
        self.save()
    }

    /// Replace the whole sequence.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<()> {
        self.records = records;
        self.save()
    }

    /// Apply `f` to every record, then persist. The only operation touching
    /// more than one record per call.
    pub fn update_each<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut T),
    {
        for record in &mut self.records {
            f(record);
        }
        self.save()
    }

    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.records)?;
        self.port.set(T::SLOT, &raw)?;
        log::info!(
            "slot `{}`: {} records written",
            T::SLOT,
            self.records.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use serde::{Deserialize, Serialize};

    use crate::collection::CollectionStore;
    use crate::memory_port::MemoryPort;
    use crate::port::StoragePort;
    use crate::record::Record;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(default)]
        id: String,
        text: String,
    }

    impl Note {
        fn with_text(text: &str) -> Self {
            Self {
                id: String::new(),
                text: text.to_owned(),
            }
        }
    }

    impl Record for Note {
        const SLOT: &'static str = "notes";

        fn id(&self) -> &str {
            &self.id
        }

        fn assign_id(&mut self, id: String) {
            self.id = id;
        }

        fn is_complete(&self) -> bool {
            !self.text.trim().is_empty()
        }
    }

    #[test]
    fn test_add_assigns_fresh_id_and_persists() {
        let mut port = MemoryPort::new();
        let id = {
            let mut store =
                CollectionStore::<Note, _>::new(&mut port).unwrap();
            store.add(Note::with_text("Go")).unwrap()
        };
        assert!(!id.is_empty());

        let store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id, id);
        assert_eq!(store.records()[0].text, "Go");
    }

    #[test]
    fn test_incomplete_record_is_refused() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        assert!(store.add(Note::with_text("  ")).is_err());
        assert!(store.records().is_empty());

        drop(store);
        // Nothing was written through to the port either.
        assert_eq!(port.get("notes").unwrap(), None);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        store.add(Note::with_text("a")).unwrap();
        let b = store.add(Note::with_text("b")).unwrap();
        store.add(Note::with_text("c")).unwrap();

        store.remove(&b).unwrap();
        drop(store);

        let store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        let texts: Vec<_> = store
            .records()
            .iter()
            .map(|note| note.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        store.add(Note::with_text("a")).unwrap();

        assert!(store.remove("no-such-id").is_ok());
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_malformed_slot_degrades_to_empty() {
        let mut port = MemoryPort::new();
        port.set("notes", "{ definitely not json").unwrap();

        let store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_replace_all_overwrites() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        store.add(Note::with_text("old")).unwrap();

        store
            .replace_all(vec![Note {
                id: "kept".to_owned(),
                text: "new".to_owned(),
            }])
            .unwrap();
        drop(store);

        let store = CollectionStore::<Note, _>::new(&mut port).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id, "kept");
    }

    #[quickcheck]
    fn prop_ids_unique_and_order_preserved(texts: Vec<String>) -> bool {
        let mut port = MemoryPort::new();
        let mut store =
            CollectionStore::<Note, _>::new(&mut port).unwrap();

        let accepted: Vec<String> = texts
            .iter()
            .filter(|text| !text.trim().is_empty())
            .cloned()
            .collect();
        for text in &accepted {
            store.add(Note::with_text(text)).unwrap();
        }

        let stored: Vec<_> = store.records().to_vec();
        let ordered = stored
            .iter()
            .map(|note| note.text.clone())
            .collect::<Vec<_>>()
            == accepted;
        let unique = stored
            .iter()
            .enumerate()
            .all(|(i, a)| stored[i + 1..].iter().all(|b| a.id != b.id));

        ordered && unique
    }
}
