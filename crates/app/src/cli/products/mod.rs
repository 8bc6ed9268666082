use std::sync::Arc;

use clap::{Args, Subcommand};
use storefront_app::store::Store;

mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    Seed(seed::SeedProductsArgs),
    List,
}

pub(crate) async fn run(command: ProductsCommand, store: Arc<dyn Store>) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Seed(args) => seed::run(args, store).await,
        ProductsSubcommand::List => list::run(store).await,
    }
}
