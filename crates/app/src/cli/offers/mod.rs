use clap::{Args, Subcommand};

mod list;
mod register;

#[derive(Debug, Args)]
pub(crate) struct OffersCommand {
    #[command(subcommand)]
    command: OffersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OffersSubcommand {
    /// Register a new offer for a restaurant
    Register(register::RegisterOfferArgs),

    /// List a restaurant's offers in registration order
    List(list::ListOffersArgs),
}

pub(crate) async fn run(command: OffersCommand) -> Result<(), String> {
    match command.command {
        OffersSubcommand::Register(args) => register::run(args).await,
        OffersSubcommand::List(args) => list::run(args).await,
    }
}
