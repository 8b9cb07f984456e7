use std::path::Path;

use folio_content::profile::{About as AboutRecord, Profile as ProfileRecord};
use folio_remote::ProfileClient;
use folio_storage::singleton::SingletonStore;

use crate::error::AppError;
use crate::util::{provide_api, provide_port};

/// Available commands for the `profile` subcommand
#[derive(clap::Subcommand, Debug)]
pub enum Profile {
    Show(Show),
    Set(Set),
    About(About),
    Pull(Pull),
    Push(Push),
}

impl Profile {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        match self {
            Profile::Show(cmd) => cmd.run(root),
            Profile::Set(cmd) => cmd.run(root),
            Profile::About(cmd) => cmd.run(root),
            Profile::Pull(cmd) => cmd.run(root).await,
            Profile::Push(cmd) => cmd.run(root).await,
        }
    }
}

fn print_profile(profile: &ProfileRecord) {
    println!("Name:     {}", profile.name);
    println!("Title:    {}", profile.title);
    println!("Bio:      {}", profile.bio);
    println!("Image:    {}", profile.profile_image);
    println!("Email:    {}", profile.email);
    println!("Phone:    {}", profile.phone);
    println!("Location: {}", profile.location);
    println!("Resume:   {}", profile.resume_link);
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "show", about = "Show the stored profile and about section")]
pub struct Show {}

impl Show {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            SingletonStore::<ProfileRecord, _>::new(provide_port(root)?);
        match store.load()? {
            Some(profile) => print_profile(&profile),
            None => println!("No profile stored yet"),
        }

        let about =
            SingletonStore::<AboutRecord, _>::new(provide_port(root)?);
        if let Some(about) = about.load()? {
            println!();
            println!("About: {}", about.description);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "set", about = "Update profile fields and save wholesale")]
pub struct Set {
    #[clap(long)]
    name: Option<String>,
    #[clap(long)]
    title: Option<String>,
    #[clap(long)]
    bio: Option<String>,
    #[clap(long, help = "Profile image URL")]
    image: Option<String>,
    #[clap(long)]
    email: Option<String>,
    #[clap(long)]
    phone: Option<String>,
    #[clap(long)]
    location: Option<String>,
    #[clap(long, help = "Resume URL")]
    resume: Option<String>,
}

impl Set {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            SingletonStore::<ProfileRecord, _>::new(provide_port(root)?);
        let mut profile = store.load()?.unwrap_or_default();

        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(title) = &self.title {
            profile.title = title.clone();
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
        if let Some(image) = &self.image {
            profile.profile_image = image.clone();
        }
        if let Some(email) = &self.email {
            profile.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(location) = &self.location {
            profile.location = location.clone();
        }
        if let Some(resume) = &self.resume {
            profile.resume_link = resume.clone();
        }

        store.save(&profile)?;
        print_profile(&profile);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "about", about = "Replace the about section")]
pub struct About {
    #[clap(help = "About description")]
    description: String,
}

impl About {
    pub fn run(&self, root: &Path) -> Result<(), AppError> {
        let mut store =
            SingletonStore::<AboutRecord, _>::new(provide_port(root)?);
        store.save(&AboutRecord {
            description: self.description.clone(),
        })?;
        println!("About section saved");
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "pull", about = "Fetch the remote profile into local storage")]
pub struct Pull {}

impl Pull {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let client = ProfileClient::new(provide_api(root)?);
        let profile = client.fetch().await?;

        let mut store =
            SingletonStore::<ProfileRecord, _>::new(provide_port(root)?);
        store.save(&profile)?;
        print_profile(&profile);
        Ok(())
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "push", about = "Upload the local profile to the remote API")]
pub struct Push {}

impl Push {
    pub async fn run(&self, root: &Path) -> Result<(), AppError> {
        let store =
            SingletonStore::<ProfileRecord, _>::new(provide_port(root)?);
        let profile = match store.load()? {
            Some(profile) => profile,
            None => {
                println!("No profile stored yet; nothing to push");
                return Ok(());
            }
        };

        let client = ProfileClient::new(provide_api(root)?);
        client.push(&profile).await?;
        println!("Profile pushed");
        Ok(())
    }
}
