use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_storage::record::Record;
use folio_storage::MESSAGES_SLOT;

/// A contact form submission. The console only reads and deletes these;
/// new messages arrive through the public site writing the same slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Record for Message {
    const SLOT: &'static str = MESSAGES_SLOT;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}
