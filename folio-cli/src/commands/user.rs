use std::path::Path;
use std::str::FromStr;

use folio_content::user::{Role, User as UserRecord};
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `user` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum User {
    List(List),
    Add(Add),
    Remove(Remove),
}

impl User {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            User::List(cmd) => cmd.run(root),
            User::Add(cmd) => cmd.run(root),
            User::Remove(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List panel users")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<UserRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No users yet");
            return Ok(());
        }
        for user in store.records() {
            // Passwords stay out of the listing.
            println!(
                "{}  {}  {}  ({})",
                user.id, user.name, user.email, user.role
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "add", about = "Add a panel user")]
pub struct Add {
    #[clap(help = "Display name")]
    name: String,
    #[clap(help = "Email address")]
    email: String,
    #[clap(help = "Password")]
    password: String,
    #[clap(long, default_value = "viewer", help = "admin, editor or viewer")]
    role: String,
}

impl Add {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let role =
            Role::from_str(&self.role).map_err(AppError::InvalidValue)?;

        let mut store =
            CollectionStore::<UserRecord, _>::new(provide_port(root)?)?;
        let result = store.add(UserRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
            ..Default::default()
        });
        match result {
            Ok(id) => println!("User added: {}", id),
            Err(err) => println!("Refused: {}", err),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a user by id")]
pub struct Remove {
    #[clap(help = "User id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<UserRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        println!("{} users left", store.records().len());
        Ok(())
    }
}
