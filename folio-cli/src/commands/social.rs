use std::path::Path;

use folio_content::social::Social as SocialRecord;
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `social` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum Social {
    List(List),
    Add(Add),
    Remove(Remove),
}

impl Social {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Social::List(cmd) => cmd.run(root),
            Social::Add(cmd) => cmd.run(root),
            Social::Remove(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List social links")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<SocialRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No social links yet");
            return Ok(());
        }
        for social in store.records() {
            println!("{}  {}  {}", social.id, social.name, social.url);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a social link")]
pub struct Add {
    #[clap(help = "Platform name, e.g. GitHub")]
    name: String,
    #[clap(help = "Profile URL")]
    url: String,
}

impl Add {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<SocialRecord, _>::new(provide_port(root)?)?;
        let result = store.add(SocialRecord {
            name: self.name.clone(),
            url: self.url.clone(),
            ..Default::default()
        });
        match result {
            Ok(id) => println!("Social link added: {}", id),
            Err(err) => println!("Refused: {}", err),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a social link by id")]
pub struct Remove {
    #[clap(help = "Social link id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<SocialRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        println!("{} social links left", store.records().len());
        Ok(())
    }
}
