use serde::{Deserialize, Serialize};

use folio_storage::record::Record;
use folio_storage::SOCIAL_SLOT;

/// A social media profile link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Record for Social {
    const SLOT: &'static str = SOCIAL_SLOT;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.url.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use folio_storage::collection::CollectionStore;
    use folio_storage::memory_port::MemoryPort;

    use super::Social;

    #[test]
    fn test_both_fields_are_required() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<Social, _>::new(&mut port).unwrap();

        assert!(store
            .add(Social {
                name: "GitHub".to_owned(),
                ..Default::default()
            })
            .is_err());
        assert!(store
            .add(Social {
                name: "GitHub".to_owned(),
                url: "https://github.com/example".to_owned(),
                ..Default::default()
            })
            .is_ok());
    }
}
