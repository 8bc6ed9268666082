use std::sync::Arc;

use storefront_app::{
    domain::products::{ProductsService, StoreProductsService},
    store::Store,
};

pub(crate) async fn run(store: Arc<dyn Store>) -> Result<(), String> {
    let products = StoreProductsService::new(store).list_products().await;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!("{}\t{}\t{}", product.id, product.price, product.name);
    }

    Ok(())
}
