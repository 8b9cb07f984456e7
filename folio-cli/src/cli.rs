use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "folio-cli")]
#[clap(about = "Manage portfolio content from the terminal", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_parser,
        help = "Data directory (defaults to ~/.folio)"
    )]
    pub root_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
