use std::sync::Arc;

use clap::Args;
use storefront_app::{
    domain::ledger::{
        LedgerService, StoreLedgerService,
        config::{DEFAULT_NTH_ORDER, DEFAULT_PERCENTAGE, DiscountConfig},
    },
    store::Store,
};

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    /// Every nth order of a user earns a discount code
    #[arg(long, env = "DISCOUNT_NTH_ORDER", default_value_t = DEFAULT_NTH_ORDER)]
    nth_order: u32,

    /// Discount percentage granted by a code
    #[arg(long, env = "DISCOUNT_PERCENTAGE", default_value_t = DEFAULT_PERCENTAGE)]
    percentage: u8,
}

pub(crate) async fn run(args: StatsArgs, store: Arc<dyn Store>) -> Result<(), String> {
    let config = DiscountConfig::new(args.nth_order, args.percentage)
        .map_err(|error| format!("invalid discount config: {error}"))?;

    let ledger = StoreLedgerService::open(store, config)
        .await
        .map_err(|error| format!("failed to replay orders: {error}"))?;

    let stats = ledger.running_stats().await;

    println!("order_count: {}", stats.order_count);
    println!("total_items: {}", stats.total_items);
    println!("total_amount: {}", stats.total_amount);
    println!("total_discount: {}", stats.total_discount);
    println!("nth_order: {}", stats.config.nth_order());
    println!("discount_percentage: {}", stats.config.percentage());

    for order in &stats.recent_orders {
        println!();
        println!("order_id: {}", order.id);
        println!("user_id: {}", order.user_id);
        println!("total: {}", order.total);
        println!("created_at: {}", order.created_at);
    }

    Ok(())
}
