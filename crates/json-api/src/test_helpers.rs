//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::domain::{ledger::MockLedgerService, products::MockProductsService};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();

    products
}

fn strict_ledger_mock() -> MockLedgerService {
    let mut ledger = MockLedgerService::new();

    ledger.expect_checkout().never();
    ledger.expect_available_code().never();
    ledger.expect_validate_code().never();
    ledger.expect_stats().never();
    ledger.expect_running_stats().never();
    ledger.expect_config().never();
    ledger.expect_update_config().never();

    ledger
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        Arc::new(State::new(Arc::new(products), Arc::new(strict_ledger_mock()))),
        route,
    )
}

pub(crate) fn ledger_service(ledger: MockLedgerService, route: Router) -> Service {
    service(
        Arc::new(State::new(Arc::new(strict_products_mock()), Arc::new(ledger))),
        route,
    )
}
