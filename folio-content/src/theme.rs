use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use folio_error::{FolioError, Result};
use folio_storage::collection::CollectionStore;
use folio_storage::port::StoragePort;
use folio_storage::record::Record;
use folio_storage::THEMES_SLOT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Invalid theme mode: {}", s)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// A visual preset for the portfolio site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub mode: ThemeMode,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub border_radius: String,
    pub animation_enabled: bool,
    pub is_active: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            mode: ThemeMode::Dark,
            primary_color: "#00ff88".to_owned(),
            secondary_color: "#ff006e".to_owned(),
            background_color: "#0a0e27".to_owned(),
            text_color: "#e0e6ff".to_owned(),
            accent_color: "#00d9ff".to_owned(),
            font_family: "Geist".to_owned(),
            border_radius: "0.5rem".to_owned(),
            animation_enabled: true,
            is_active: false,
        }
    }
}

impl Record for Theme {
    const SLOT: &'static str = THEMES_SLOT;

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

/// Append a theme. The first theme stored in an empty collection becomes
/// the active one.
pub fn add_theme<P: StoragePort>(
    store: &mut CollectionStore<Theme, P>,
    mut theme: Theme,
) -> Result<String> {
    theme.is_active = store.records().is_empty();
    store.add(theme)
}

/// Make exactly `id` active, clearing the flag on every other theme in the
/// same persisted operation. An unknown id is refused before anything is
/// written, so the collection never ends up with zero active themes.
pub fn set_active<P: StoragePort>(
    store: &mut CollectionStore<Theme, P>,
    id: &str,
) -> Result<()> {
    if store.get(id).is_none() {
        return Err(FolioError::Other(format!("no theme with id {}", id)));
    }
    store.update_each(|theme| theme.is_active = theme.id == id)
}
