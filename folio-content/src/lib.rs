pub mod category;
pub mod message;
pub mod profile;
pub mod skill;
pub mod social;
pub mod theme;
pub mod user;

pub use category::Category;
pub use message::Message;
pub use profile::{About, Profile};
pub use skill::Skill;
pub use social::Social;
pub use theme::{Theme, ThemeMode};
pub use user::{Role, User};
