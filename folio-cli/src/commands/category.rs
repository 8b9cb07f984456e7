use std::path::Path;

use folio_content::category::Category as CategoryRecord;
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `category` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum Category {
    List(List),
    Add(Add),
    Remove(Remove),
}

impl Category {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Category::List(cmd) => cmd.run(root),
            Category::Add(cmd) => cmd.run(root),
            Category::Remove(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List categories")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<CategoryRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No categories yet");
            return Ok(());
        }
        for category in store.records() {
            println!("{}  {}", category.id, category.name);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a category")]
pub struct Add {
    #[clap(help = "Category name, e.g. Frontend")]
    name: String,
}

impl Add {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<CategoryRecord, _>::new(provide_port(root)?)?;
        let result = store.add(CategoryRecord {
            name: self.name.trim().to_owned(),
            ..Default::default()
        });
        match result {
            Ok(id) => println!("Category added: {}", id),
            Err(err) => println!("Refused: {}", err),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a category by id")]
pub struct Remove {
    #[clap(help = "Category id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<CategoryRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        // Skills referencing the category keep their free-text value.
        println!("{} categories left", store.records().len());
        Ok(())
    }
}
