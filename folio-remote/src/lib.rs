pub mod client;
pub mod profile;
pub mod projects;

pub use client::ApiClient;
pub use profile::ProfileClient;
pub use projects::{Project, ProjectDraft, ProjectPatch, ProjectsClient};
