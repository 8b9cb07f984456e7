use serde::{Deserialize, Serialize};

use folio_storage::record::Record;
use folio_storage::SKILLS_SLOT;

use crate::category::Category;

/// A professional skill shown on the portfolio.
///
/// `level` is 1-10, `percentage` 0-100. `category` is a soft reference
/// into the category collection; see [`category_is_known`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub category: String,
    pub percentage: u8,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: 5,
            icon: "⚡".to_owned(),
            category: String::new(),
            percentage: 80,
        }
    }
}

impl Record for Skill {
    const SLOT: &'static str = SKILLS_SLOT;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.category.trim().is_empty()
    }
}

/// Soft foreign-key check against the stored category set. An unknown
/// category is worth a warning but never refuses the add.
pub fn category_is_known(categories: &[Category], name: &str) -> bool {
    categories.iter().any(|category| category.name == name)
}
