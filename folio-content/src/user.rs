use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use folio_storage::record::Record;
use folio_storage::USERS_SLOT;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Editor => write!(f, "editor"),
            Role::Viewer => write!(f, "viewer"),
        }
    }
}

/// An admin panel account. Stored as-is; there is no authentication
/// layer, hashing, or email uniqueness on purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Record for User {
    const SLOT: &'static str = USERS_SLOT;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use folio_storage::collection::CollectionStore;
    use folio_storage::memory_port::MemoryPort;

    use super::{Role, User};

    #[test]
    fn test_role_serializes_lowercase() {
        let user = User {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
            role: Role::Editor,
            ..Default::default()
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "editor");
    }

    #[test]
    fn test_missing_password_is_refused() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<User, _>::new(&mut port).unwrap();
        let result = store.add(User {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_emails_are_allowed() {
        let mut port = MemoryPort::new();
        let mut store = CollectionStore::<User, _>::new(&mut port).unwrap();
        let base = User {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
            ..Default::default()
        };
        store.add(base.clone()).unwrap();
        store.add(base).unwrap();
        assert_eq!(store.records().len(), 2);
    }
}
