use std::path::Path;

use folio_content::message::Message as MessageRecord;
use folio_storage::collection::CollectionStore;

use crate::error::AppError;
use crate::util::provide_port;

/// Available commands for the `message` subcommand. The inbox is
/// read-only except for delete; submissions come from the public site.
#[derive(clap::Subcommand, Debug)]
pub enum Message {
    List(List),
    Show(Show),
    Remove(Remove),
}

impl Message {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Message::List(cmd) => cmd.run(root),
            Message::Show(cmd) => cmd.run(root),
            Message::Remove(cmd) => cmd.run(root),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List inbox messages")]
pub struct List {}

impl List {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<MessageRecord, _>::new(provide_port(root)?)?;
        if store.records().is_empty() {
            println!("No messages yet");
            return Ok(());
        }
        for message in store.records() {
            println!(
                "{}  {}  {}  {}",
                message.id,
                message.timestamp.format("%b %e %H:%M %Y"),
                message.name,
                message.subject
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show a full message")]
pub struct Show {
    #[clap(help = "Message id")]
    id: String,
}

impl Show {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            CollectionStore::<MessageRecord, _>::new(provide_port(root)?)?;
        match store.get(&self.id) {
            Some(message) => {
                println!("From:    {} <{}>", message.name, message.email);
                if !message.phone.is_empty() {
                    println!("Phone:   {}", message.phone);
                }
                println!("Subject: {}", message.subject);
                println!("Date:    {}", message.timestamp.to_rfc3339());
                println!();
                println!("{}", message.message);
            }
            None => println!("No message with id {}", self.id),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "remove", about = "Delete a message by id")]
pub struct Remove {
    #[clap(help = "Message id")]
    id: String,
}

impl Remove {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            CollectionStore::<MessageRecord, _>::new(provide_port(root)?)?;
        store.remove(&self.id)?;
        println!("{} messages left", store.records().len());
        Ok(())
    }
}
