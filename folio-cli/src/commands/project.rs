use std::path::{Path, PathBuf};

use folio_remote::{ProjectDraft, ProjectPatch, ProjectsClient};

use crate::error::AppError;
use crate::util::provide_api;

/// Available commands for the `project` subcommand. Projects are
/// server-owned; every command talks to the remote API.
#[derive(clap::Subcommand, Debug)]
pub enum Project {
    List(List),
    Add(Add),
    Update(Update),
    Remove(Remove),
}

impl Project {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Project::List(cmd) => cmd.run(root).await,
            Project::Add(cmd) => cmd.run(root).await,
            Project::Update(cmd) => cmd.run(root).await,
            Project::Remove(cmd) => cmd.run(root).await,
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List remote projects")]
pub struct List {}

impl List {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut client = ProjectsClient::new(provide_api(root)?);
        let projects = client.list().await?;
        if projects.is_empty() {
            println!("No projects yet");
            return Ok(());
        }
        for project in projects {
            println!(
                "{}  {}  [{}]  {} technologies",
                project.id,
                project.title,
                project.category,
                project.technologies.len()
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Create a remote project")]
pub struct Add {
    #[clap(help = "Project title")]
    title: String,
    #[clap(help = "Project description")]
    description: String,
    #[clap(long)]
    subtitle: Option<String>,
    #[clap(long, help = "GitHub repository URL")]
    github: Option<String>,
    #[clap(long, help = "Live deployment URL")]
    live: Option<String>,
    #[clap(long, help = "Category id")]
    category: Option<String>,
    #[clap(long = "tech", action = clap::ArgAction::Append, help = "Technology (repeatable)")]
    technologies: Vec<String>,
    #[clap(long = "feature", action = clap::ArgAction::Append, help = "Feature (repeatable)")]
    features: Vec<String>,
    #[clap(long, value_parser, help = "Cover image file")]
    cover: Option<PathBuf>,
    #[clap(long = "image", action = clap::ArgAction::Append, value_parser, help = "Gallery image file (repeatable)")]
    images: Vec<PathBuf>,
}

impl Add {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let draft = ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            subtitle: self.subtitle.clone().unwrap_or_default(),
            github_link: self.github.clone().unwrap_or_default(),
            live_link: self.live.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            technologies: self.technologies.clone(),
            features: self.features.clone(),
            cover_image: self.cover.clone(),
            images: self.images.clone(),
        };

        let mut client = ProjectsClient::new(provide_api(root)?);
        let project = client.create(draft).await?;
        println!("Project created: {}  {}", project.id, project.title);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "update", about = "Patch fields of a remote project")]
pub struct Update {
    #[clap(help = "Project id")]
    id: String,
    #[clap(long)]
    title: Option<String>,
    #[clap(long)]
    subtitle: Option<String>,
    #[clap(long)]
    description: Option<String>,
    #[clap(long, help = "GitHub repository URL")]
    github: Option<String>,
    #[clap(long, help = "Live deployment URL")]
    live: Option<String>,
    #[clap(long, help = "Category id")]
    category: Option<String>,
    #[clap(long = "tech", action = clap::ArgAction::Append, help = "Replace technologies (repeatable)")]
    technologies: Vec<String>,
    #[clap(long = "feature", action = clap::ArgAction::Append, help = "Replace features (repeatable)")]
    features: Vec<String>,
}

impl Update {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let patch = ProjectPatch {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            description: self.description.clone(),
            github_link: self.github.clone(),
            live_link: self.live.clone(),
            category: self.category.clone(),
            technologies: if self.technologies.is_empty() {
                None
            } else {
                Some(self.technologies.clone())
            },
            features: if self.features.is_empty() {
                None
            } else {
                Some(self.features.clone())
            },
        };
        if patch.is_empty() {
            println!("Nothing to update");
            return Ok(());
        }

        let mut client = ProjectsClient::new(provide_api(root)?);
        let project = client.update(&self.id, &patch).await?;
        println!("Project updated: {}  {}", project.id, project.title);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a remote project by id")]
pub struct Remove {
    #[clap(help = "Project id")]
    id: String,
}

impl Remove {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut client = ProjectsClient::new(provide_api(root)?);
        client.delete(&self.id).await?;
        println!("Project {} deleted", self.id);
        Ok(())
    }
}
