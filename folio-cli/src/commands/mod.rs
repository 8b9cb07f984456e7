use clap::Subcommand;

pub mod category;
pub mod message;
pub mod profile;
pub mod project;
pub mod skill;
pub mod social;
pub mod theme;
pub mod user;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Manage the profile and about sections")]
    Profile {
        #[clap(subcommand)]
        subcommand: profile::Profile,
    },
    #[command(about = "Manage theme presets")]
    Theme {
        #[clap(subcommand)]
        subcommand: theme::Theme,
    },
    #[command(about = "Manage skills")]
    Skill {
        #[clap(subcommand)]
        subcommand: skill::Skill,
    },
    #[command(about = "Manage social links")]
    Social {
        #[clap(subcommand)]
        subcommand: social::Social,
    },
    #[command(about = "Manage categories")]
    Category {
        #[clap(subcommand)]
        subcommand: category::Category,
    },
    #[command(about = "Read and delete contact messages")]
    Message {
        #[clap(subcommand)]
        subcommand: message::Message,
    },
    #[command(about = "Manage panel users")]
    User {
        #[clap(subcommand)]
        subcommand: user::User,
    },
    #[command(about = "Manage remote projects")]
    Project {
        #[clap(subcommand)]
        subcommand: project::Project,
    },
}
