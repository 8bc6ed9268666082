use std::{path::PathBuf, sync::Arc};

use clap::Args;
use serde::Deserialize;
use storefront_app::{domain::products::data::NewProduct, store::Store};

#[derive(Debug, Args)]
pub(crate) struct SeedProductsArgs {
    /// JSON file with `{"products": [...]}` or a bare array of products
    #[arg(long)]
    file: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Wrapped { products: Vec<NewProduct> },
    Bare(Vec<NewProduct>),
}

impl From<SeedFile> for Vec<NewProduct> {
    fn from(file: SeedFile) -> Self {
        match file {
            SeedFile::Wrapped { products } | SeedFile::Bare(products) => products,
        }
    }
}

pub(crate) async fn run(args: SeedProductsArgs, store: Arc<dyn Store>) -> Result<(), String> {
    let raw = tokio::fs::read(&args.file)
        .await
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let products = parse(&raw)?;

    if let Some(product) = products.iter().find(|product| product.price == 0) {
        return Err(format!("product {} must have a positive price", product.id));
    }

    let inserted = store
        .insert_products(products)
        .await
        .map_err(|error| format!("failed to seed products: {error}"))?;

    println!("seeded {} products", inserted.len());

    Ok(())
}

fn parse(raw: &[u8]) -> Result<Vec<NewProduct>, String> {
    serde_json::from_slice::<SeedFile>(raw)
        .map(Into::into)
        .map_err(|error| format!("invalid seed file: {error}"))
}
