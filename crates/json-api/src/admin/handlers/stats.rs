//! Admin Stats Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{admin::models::StatsResponse, extensions::*};

/// Admin Stats Handler
///
/// Folds the persisted order history by default. `?running=true` reads the
/// ledger's incrementally maintained counters instead.
#[endpoint(tags("admin"), summary = "Get Sales Statistics")]
pub(crate) async fn handler(
    running: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<Json<StatsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let stats = if running.into_inner().unwrap_or(false) {
        state.ledger.running_stats().await
    } else {
        state.ledger.stats().await
    };

    Ok(Json(stats.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        ledger::{MockLedgerService, config::DiscountConfig, stats::Stats},
        orders::records::{OrderRecord, OrderUuid},
    };

    use crate::test_helpers::ledger_service;

    use super::*;

    fn make_service(ledger: MockLedgerService) -> Service {
        ledger_service(ledger, Router::with_path("admin/stats").get(handler))
    }

    fn make_stats(order_count: u64) -> Stats {
        Stats {
            total_items: 3,
            total_amount: 280,
            total_discount: 20,
            order_count,
            recent_orders: vec![OrderRecord {
                id: OrderUuid::new(),
                user_id: "abc".to_string(),
                items: Vec::new(),
                subtotal: 200,
                discount: 20,
                total: 180,
                redeemed_code: Some("USERABC1".to_string()),
                created_at: Timestamp::UNIX_EPOCH,
            }],
            config: DiscountConfig::default(),
        }
    }

    #[tokio::test]
    async fn test_stats_fold_history_by_default() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger.expect_stats().once().return_once(|| make_stats(2));
        ledger.expect_running_stats().never();

        let response: StatsResponse = TestClient::get("http://example.com/admin/stats")
            .send(&make_service(ledger))
            .await
            .take_json()
            .await?;

        assert_eq!(response.order_count, 2);
        assert_eq!(response.total_amount, 280);
        assert_eq!(response.config.nth_order, 3);
        assert_eq!(
            response
                .recent_orders
                .first()
                .and_then(|order| order.redeemed_code.as_deref()),
            Some("USERABC1")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_running_query_uses_counters() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger.expect_stats().never();
        ledger
            .expect_running_stats()
            .once()
            .return_once(|| make_stats(7));

        let response: StatsResponse =
            TestClient::get("http://example.com/admin/stats?running=true")
                .send(&make_service(ledger))
                .await
                .take_json()
                .await?;

        assert_eq!(response.order_count, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_stats_use_camel_case_keys() -> TestResult {
        let mut ledger = MockLedgerService::new();

        ledger.expect_stats().once().return_once(|| make_stats(1));

        let body: serde_json::Value = TestClient::get("http://example.com/admin/stats")
            .send(&make_service(ledger))
            .await
            .take_json()
            .await?;

        assert_eq!(body["totalDiscount"], 20);
        assert_eq!(body["config"]["nthOrder"], 3);
        assert_eq!(body["recentOrders"][0]["userId"], "abc");

        Ok(())
    }
}
