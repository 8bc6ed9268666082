use clap::{Parser, Subcommand};

mod products;
mod stats;
mod store;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    store: store::StoreArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Stats(stats::StatsArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let store = self.store.open().await?;

        match self.command {
            Commands::Products(command) => products::run(command, store).await,
            Commands::Stats(args) => stats::run(args, store).await,
        }
    }
}
