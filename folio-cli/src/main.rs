mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Cli::parse();
    if let Err(err) = run(args).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), AppError> {
    let root = util::provide_root(&args.root_dir)?;

    match &args.command {
        Commands::Profile { subcommand } => subcommand.run(&root).await,
        Commands::Theme { subcommand } => subcommand.run(&root),
        Commands::Skill { subcommand } => subcommand.run(&root),
        Commands::Social { subcommand } => subcommand.run(&root),
        Commands::Category { subcommand } => subcommand.run(&root),
        Commands::Message { subcommand } => subcommand.run(&root),
        Commands::User { subcommand } => subcommand.run(&root),
        Commands::Project { subcommand } => subcommand.run(&root).await,
    }
}
