//! Ledger service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::{
    domain::{
        ledger::{
            config::{DiscountConfig, DiscountConfigUpdate},
            errors::{CheckoutError, ConfigError},
            receipt::Receipt,
            state::{LedgerState, UserLedger},
            stats::Stats,
        },
        orders::data::NewCheckout,
    },
    store::{Store, StoreError},
};

/// Ledger backed by a [`Store`].
///
/// All state lives behind one async mutex that is held across the store
/// append, so checkouts are applied one at a time and an order is counted
/// only once it has been persisted.
///
/// Each checkout runs on its own task. Dropping the caller's future does not
/// stop an order between its append and its commit.
pub struct StoreLedgerService {
    store: Arc<dyn Store>,
    state: Arc<Mutex<LedgerState>>,
}

impl StoreLedgerService {
    /// An empty ledger that ignores any history already in `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: DiscountConfig) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(LedgerState::new(config))),
        }
    }

    /// Open the ledger by replaying every order persisted in `store`.
    ///
    /// # Errors
    ///
    /// Returns an error when the order history cannot be read.
    pub async fn open(store: Arc<dyn Store>, config: DiscountConfig) -> Result<Self, StoreError> {
        let orders = store.load_orders().await?;
        let state = LedgerState::replay(config, &orders);

        info!(
            orders = orders.len(),
            users = state.user_count(),
            "ledger replayed from store"
        );

        Ok(Self {
            store,
            state: Arc::new(Mutex::new(state)),
        })
    }
}

impl Debug for StoreLedgerService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreLedgerService").finish_non_exhaustive()
    }
}

#[async_trait]
impl LedgerService for StoreLedgerService {
    async fn checkout(&self, checkout: NewCheckout) -> Result<Receipt, CheckoutError> {
        let task = tokio::spawn(place_order(
            Arc::clone(&self.state),
            Arc::clone(&self.store),
            checkout,
        ));

        task.await.map_err(|source| {
            error!("checkout task did not complete: {source}");

            CheckoutError::Interrupted(source)
        })?
    }

    async fn available_code(&self, user_id: &str) -> Option<String> {
        self.state
            .lock()
            .await
            .user(user_id)
            .and_then(UserLedger::first_available)
            .map(ToString::to_string)
    }

    async fn validate_code(&self, user_id: &str, code: &str) -> Result<(), CheckoutError> {
        self.state.lock().await.check_code(user_id, code)
    }

    async fn stats(&self) -> Stats {
        let config = self.config().await;

        match self.store.load_orders().await {
            Ok(orders) => Stats::from_history(&orders, config),
            Err(source) => {
                error!("failed to load order history for stats: {source}");

                Stats::empty(config)
            }
        }
    }

    async fn running_stats(&self) -> Stats {
        let state = self.state.lock().await;

        state.totals().snapshot(state.config())
    }

    async fn config(&self) -> DiscountConfig {
        self.state.lock().await.config()
    }

    async fn update_config(
        &self,
        update: DiscountConfigUpdate,
    ) -> Result<DiscountConfig, ConfigError> {
        let mut state = self.state.lock().await;
        let config = state.config().merge(update)?;

        state.set_config(config);

        info!(
            nth_order = config.nth_order(),
            percentage = config.percentage(),
            "discount config updated"
        );

        Ok(config)
    }
}

async fn place_order(
    state: Arc<Mutex<LedgerState>>,
    store: Arc<dyn Store>,
    checkout: NewCheckout,
) -> Result<Receipt, CheckoutError> {
    let mut state = state.lock_owned().await;

    let user_id = checkout.user_id.clone();
    let order = state.price(checkout)?;

    let order = store.append_order(order).await.map_err(|source| {
        warn!(%user_id, "order not persisted, ledger left unchanged: {source}");

        CheckoutError::Store(source)
    })?;

    debug!(
        %user_id,
        order = %order.id,
        subtotal = order.subtotal,
        discount = order.discount,
        "checkout completed"
    );

    Ok(state.commit(order))
}

#[automock]
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Places an order: prices it, redeems its code, persists it and updates
    /// the user's reward status.
    async fn checkout(&self, checkout: NewCheckout) -> Result<Receipt, CheckoutError>;

    /// The user's oldest unredeemed code, if any.
    async fn available_code(&self, user_id: &str) -> Option<String>;

    /// Checks that `code` is currently redeemable by `user_id`.
    async fn validate_code(&self, user_id: &str, code: &str) -> Result<(), CheckoutError>;

    /// Statistics folded from the persisted order history. Read failures are
    /// logged and yield empty statistics.
    async fn stats(&self) -> Stats;

    /// Statistics from the incrementally maintained counters.
    async fn running_stats(&self) -> Stats;

    /// Current discount configuration.
    async fn config(&self) -> DiscountConfig;

    /// Merges `update` into the configuration for all later checkouts.
    async fn update_config(
        &self,
        update: DiscountConfigUpdate,
    ) -> Result<DiscountConfig, ConfigError>;
}
