pub mod collection;
pub mod file_port;
pub mod memory_port;
pub mod port;
pub mod record;
pub mod singleton;

pub const FOLIO_FOLDER: &str = ".folio";

// Content slots, one JSON document each.
pub const PROFILE_SLOT: &str = "profile";
pub const ABOUT_SLOT: &str = "about";
pub const THEMES_SLOT: &str = "themes";
pub const SKILLS_SLOT: &str = "skills";
pub const CATEGORIES_SLOT: &str = "categories";
pub const SOCIAL_SLOT: &str = "social";
pub const MESSAGES_SLOT: &str = "messages";
pub const USERS_SLOT: &str = "users";

// Reserved for the server-owned collection; the console never writes it
// locally but the slot name stays part of the namespace.
pub const PROJECTS_SLOT: &str = "projects";
