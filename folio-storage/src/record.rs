use serde::de::DeserializeOwned;
use serde::Serialize;

/// A collection entity persisted under a fixed slot.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Slot name the collection lives under.
    const SLOT: &'static str;

    fn id(&self) -> &str;

    fn assign_id(&mut self, id: String);

    /// Entity-specific required-field predicate, checked before `add`.
    fn is_complete(&self) -> bool;
}

/// A single persisted document without an identifier (profile, about).
pub trait Singleton: Serialize + DeserializeOwned {
    const SLOT: &'static str;
}

/// Collision-resistant identifier for new records.
pub fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
