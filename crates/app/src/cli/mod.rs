use clap::{Parser, Subcommand};

mod db;
mod offers;

#[derive(Debug, Parser)]
#[command(name = "platter-app", about = "Platter offers CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Offers(offers::OffersCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Offers(command) => offers::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
