use serde::{Deserialize, Serialize};

use folio_storage::record::Record;
use folio_storage::CATEGORIES_SLOT;

/// A project/skill category. Deleting one does not cascade into the
/// skills referencing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Record for Category {
    const SLOT: &'static str = CATEGORIES_SLOT;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use folio_storage::collection::CollectionStore;
    use folio_storage::memory_port::MemoryPort;

    use super::Category;

    #[test]
    fn test_empty_name_is_refused() {
        let mut port = MemoryPort::new();
        let mut store =
            CollectionStore::<Category, _>::new(&mut port).unwrap();
        assert!(store.add(Category::default()).is_err());

        let id = store
            .add(Category {
                id: String::new(),
                name: "Frontend".to_owned(),
            })
            .unwrap();
        assert_eq!(store.get(&id).map(|c| c.name.as_str()), Some("Frontend"));
    }
}
