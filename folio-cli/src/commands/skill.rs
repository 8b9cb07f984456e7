use std::path::Path;

use folio_content::category::Category;
use folio_content::skill::{self, Skill as SkillRecord};
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `skill` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum Skill {
    List(List),
    Add(Add),
    Remove(Remove),
}

impl Skill {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Skill::List(cmd) => cmd.run(root),
            Skill::Add(cmd) => cmd.run(root),
            Skill::Remove(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List stored skills")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<SkillRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No skills yet");
            return Ok(());
        }
        for skill in store.records() {
            println!(
                "{}  {} {}  [{}]  level {}/10, {}%",
                skill.id,
                skill.icon,
                skill.name,
                skill.category,
                skill.level,
                skill.percentage
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a skill")]
pub struct Add {
    #[clap(help = "Skill name")]
    name: String,
    #[clap(help = "Category name")]
    category: String,
    #[clap(long, default_value_t = 5, help = "Level, 1-10")]
    level: u8,
    #[clap(long, default_value_t = 80, help = "Percentage, 0-100")]
    percentage: u8,
    #[clap(long, default_value = "⚡", help = "Icon")]
    icon: String,
}

impl Add {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        if !(1..=10).contains(&self.level) {
            return Err(AppError::InvalidValue(format!(
                "level must be 1-10, got {}",
                self.level
            )));
        }
        if self.percentage > 100 {
            return Err(AppError::InvalidValue(format!(
                "percentage must be 0-100, got {}",
                self.percentage
            )));
        }

        let categories =
            CollectionStore::<Category, _>::new(provide_port(root)?)?;
        if !skill::category_is_known(categories.records(), &self.category) {
            log::warn!("unknown category `{}`", self.category);
            println!(
                "Note: `{}` is not a stored category; adding anyway",
                self.category
            );
        }

        let mut store =
            CollectionStore::<SkillRecord, _>::new(provide_port(root)?)?;
        let result = store.add(SkillRecord {
            name: self.name.clone(),
            category: self.category.clone(),
            level: self.level,
            percentage: self.percentage,
            icon: self.icon.clone(),
            ..Default::default()
        });
        match result {
            Ok(id) => println!("Skill added: {}", id),
            Err(err) => println!("Refused: {}", err),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a skill by id")]
pub struct Remove {
    #[clap(help = "Skill id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<SkillRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        println!("{} skills left", store.records().len());
        Ok(())
    }
}
