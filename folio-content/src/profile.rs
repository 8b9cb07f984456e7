use serde::{Deserialize, Serialize};

use folio_storage::record::Singleton;
use folio_storage::{ABOUT_SLOT, PROFILE_SLOT};

/// The portfolio owner's profile. Singleton; saves overwrite wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub resume_link: String,
}

impl Singleton for Profile {
    const SLOT: &'static str = PROFILE_SLOT;
}

/// The free-text about section. Singleton, like [`Profile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub description: String,
}

impl Singleton for About {
    const SLOT: &'static str = ABOUT_SLOT;
}

#[cfg(test)]
mod tests {
    use folio_storage::memory_port::MemoryPort;
    use folio_storage::singleton::SingletonStore;

    use super::{About, Profile};

    #[test]
    fn test_profile_save_is_a_wholesale_overwrite() {
        let mut port = MemoryPort::new();
        let mut store = SingletonStore::<Profile, _>::new(&mut port);

        store
            .save(&Profile {
                name: "Ada Lovelace".to_owned(),
                title: "Engineer".to_owned(),
                ..Default::default()
            })
            .unwrap();
        store
            .save(&Profile {
                name: "Ada Lovelace".to_owned(),
                ..Default::default()
            })
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.name, "Ada Lovelace");
        // The earlier title is gone: no partial patching of singletons.
        assert_eq!(loaded.title, "");
    }

    #[test]
    fn test_about_roundtrip() {
        let mut port = MemoryPort::new();
        let mut store = SingletonStore::<About, _>::new(&mut port);
        assert!(store.load().unwrap().is_none());

        store
            .save(&About {
                description: "I build things.".to_owned(),
            })
            .unwrap();
        assert_eq!(
            store.load().unwrap().unwrap().description,
            "I build things."
        );
    }

    #[test]
    fn test_profile_shape_matches_console_format() {
        let profile = Profile {
            profile_image: "https://example.com/me.png".to_owned(),
            resume_link: "https://example.com/cv.pdf".to_owned(),
            ..Default::default()
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("profileImage").is_some());
        assert!(value.get("resumeLink").is_some());
    }
}
