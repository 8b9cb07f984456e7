use std::path::Path;
use std::str::FromStr;

use folio_content::theme::{self, Theme as ThemeRecord};
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `theme` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum Theme {
    List(List),
    Add(Add),
    Remove(Remove),
    SetActive(SetActive),
}

impl Theme {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Theme::List(cmd) => cmd.run(root),
            Theme::Add(cmd) => cmd.run(root),
            Theme::Remove(cmd) => cmd.run(root),
            Theme::SetActive(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List stored themes")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<ThemeRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No themes yet");
            return Ok(());
        }
        for theme in store.records() {
            let marker = if theme.is_active { "*" } else { " " };
            println!(
                "{} {}  {}  ({}, {} on {})",
                marker,
                theme.id,
                theme.name,
                theme.mode,
                theme.primary_color,
                theme.background_color
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Create a theme preset")]
pub struct Add {
    #[clap(help = "Theme name")]
    name: String,
    #[clap(long, default_value = "dark", help = "light or dark")]
    mode: String,
    #[clap(long, help = "Primary color (hex)")]
    primary: Option<String>,
    #[clap(long, help = "Secondary color (hex)")]
    secondary: Option<String>,
    #[clap(long, help = "Background color (hex)")]
    background: Option<String>,
    #[clap(long, help = "Text color (hex)")]
    text: Option<String>,
    #[clap(long, help = "Accent color (hex)")]
    accent: Option<String>,
    #[clap(long, help = "Font family")]
    font: Option<String>,
    #[clap(long, help = "Border radius, e.g. 0.5rem")]
    radius: Option<String>,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Disable animations")]
    no_animation: bool,
}

impl Add {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mode = folio_content::theme::ThemeMode::from_str(&self.mode)
            .map_err(AppError::InvalidValue)?;

        let mut theme = ThemeRecord {
            name: self.name.clone(),
            mode,
            animation_enabled: !self.no_animation,
            ..Default::default()
        };
        if let Some(color) = &self.primary {
            theme.primary_color = color.clone();
        }
        if let Some(color) = &self.secondary {
            theme.secondary_color = color.clone();
        }
        if let Some(color) = &self.background {
            theme.background_color = color.clone();
        }
        if let Some(color) = &self.text {
            theme.text_color = color.clone();
        }
        if let Some(color) = &self.accent {
            theme.accent_color = color.clone();
        }
        if let Some(font) = &self.font {
            theme.font_family = font.clone();
        }
        if let Some(radius) = &self.radius {
            theme.border_radius = radius.clone();
        }

        let mut store =
            CollectionStore::<ThemeRecord, _>::new(provide_port(root)?)?;
        match theme::add_theme(&mut store, theme) {
            Ok(id) => println!("Theme added: {}", id),
            Err(err) => println!("Refused: {}", err),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a theme by id")]
pub struct Remove {
    #[clap(help = "Theme id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<ThemeRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        println!("{} themes left", store.records().len());
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "set-active", about = "Make one theme active")]
pub struct SetActive {
    #[clap(help = "Theme id")]
    id: String,
}

impl SetActive {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<ThemeRecord, _>::new(provide_port(root)?)?;
        if let Err(err) = theme::set_active(&mut store, &self.id) {
            println!("Refused: {}", err);
            return Ok(());
        }
        for theme in store.records() {
            let marker = if theme.is_active { "*" } else { " " };
            println!("{} {}  {}", marker, theme.id, theme.name);
        }
        Ok(())
    }
}
