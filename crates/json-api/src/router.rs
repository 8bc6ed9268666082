//! App Router

use salvo::Router;

use crate::{admin, checkout, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("products").get(products::index::handler))
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(
            Router::with_path("users/{user}")
                .push(Router::with_path("discount-code").get(users::discount_code::handler))
                .push(
                    Router::with_path("discount-codes/{code}")
                        .get(users::validate_code::handler),
                ),
        )
        .push(
            Router::with_path("admin")
                .push(Router::with_path("stats").get(admin::stats::handler))
                .push(
                    Router::with_path("config")
                        .get(admin::config::handler)
                        .post(admin::update_config::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use storefront_app::{
        context::AppContext, domain::ledger::config::DiscountConfig, store::MemoryStore,
    };
    use testresult::TestResult;

    use crate::state::State;

    use super::*;

    async fn make_service() -> Result<Service, Box<dyn std::error::Error>> {
        let store = Arc::new(MemoryStore::new());
        let app = AppContext::from_store(store, DiscountConfig::new(2, 10)?).await?;

        Ok(Service::new(
            Router::new()
                .hoop(inject(State::from_app_context(app)))
                .push(app_router()),
        ))
    }

    fn order(code: Option<&str>) -> serde_json::Value {
        json!({
            "userId": "abc",
            "items": [{ "id": "p1", "name": "Mug", "price": 500, "quantity": 2 }],
            "discountCode": code,
        })
    }

    #[tokio::test]
    async fn test_reward_cycle_end_to_end() -> TestResult {
        let service = make_service().await?;

        for _ in 0..2 {
            let res = TestClient::post("http://example.com/checkout")
                .json(&order(None))
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK));
        }

        let code: serde_json::Value =
            TestClient::get("http://example.com/users/abc/discount-code")
                .send(&service)
                .await
                .take_json()
                .await?;

        let code = code["code"].as_str().ok_or("no code issued")?.to_string();

        let receipt: serde_json::Value = TestClient::post("http://example.com/checkout")
            .json(&order(Some(code.as_str())))
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(receipt["subtotal"], 1000);
        assert_eq!(receipt["discount"], 100);
        assert_eq!(receipt["total"], 900);

        let reused = TestClient::post("http://example.com/checkout")
            .json(&order(Some(code.as_str())))
            .send(&service)
            .await;

        assert_eq!(reused.status_code, Some(StatusCode::BAD_REQUEST));

        let stats: serde_json::Value = TestClient::get("http://example.com/admin/stats")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(stats["orderCount"], 3);
        assert_eq!(stats["totalItems"], 6);
        assert_eq!(stats["totalAmount"], 2900);
        assert_eq!(stats["totalDiscount"], 100);

        let running: serde_json::Value =
            TestClient::get("http://example.com/admin/stats?running=true")
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(running, stats, "history and counters agree");

        Ok(())
    }
}
