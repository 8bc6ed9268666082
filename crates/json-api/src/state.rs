//! State

use std::sync::Arc;

use storefront_app::{
    context::AppContext,
    domain::{ledger::LedgerService, products::ProductsService},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) products: Arc<dyn ProductsService>,
    pub(crate) ledger: Arc<dyn LedgerService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        products: Arc<dyn ProductsService>,
        ledger: Arc<dyn LedgerService>,
    ) -> Self {
        Self { products, ledger }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.products, app.ledger))
    }
}
