use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(container, config.cors, format!("http://{}", addr));

        tracing::info!(target: "storefront", "Server running at http://{}", addr);
        tracing::info!(target: "storefront", "Swagger UI at http://{}/docs", addr);
        tracing::info!(target: "storefront", "OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    pub fn app(container: DependencyContainer, cors: Cors, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.cart_api,
                container.checkout_api,
            ),
            "Camera Storefront API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(cors)
            .with(Tracing)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use poem::{http::StatusCode, test::TestClient};
    use serde_json::json;

    use super::*;
    use crate::config::checkout_config::CheckoutConfig;

    fn test_client() -> TestClient<impl Endpoint> {
        let checkout = CheckoutConfig {
            processing_delay: Duration::ZERO,
        };
        let container = DependencyContainer::new(&checkout).unwrap();
        TestClient::new(Server::app(
            container,
            Cors::new(),
            "http://localhost:8080".to_string(),
        ))
    }

    #[tokio::test]
    async fn should_report_healthy() {
        let cli = test_client();

        let resp = cli.get("/health").send().await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("status")
            .assert_string("healthy");
    }

    #[tokio::test]
    async fn should_list_products_of_a_category_when_filter_given() {
        let cli = test_client();

        let resp = cli
            .get("/products")
            .query("category", &"lenses")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(2);
    }

    #[tokio::test]
    async fn should_serve_flagship_product_detail() {
        let cli = test_client();

        let resp = cli.get("/products/q3-classic").send().await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("Q3 Classic");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_unknown() {
        let cli = test_client();

        let resp = cli.get("/products/does-not-exist").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_sum_quantities_when_same_product_added_twice() {
        let cli = test_client();

        for _ in 0..2 {
            cli.post("/cart/items")
                .body_json(&json!({ "product_id": "e39", "quantity": 1 }))
                .send()
                .await
                .assert_status_is_ok();
        }

        let resp = cli.get("/cart").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("items").array().assert_len(1);
        cart.get("item_count").assert_i64(2);
        cart.get("total").assert_string("3798");
    }

    #[tokio::test]
    async fn should_clamp_quantity_to_one_when_update_is_zero() {
        let cli = test_client();
        cli.post("/cart/items")
            .body_json(&json!({ "product_id": "1" }))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .put("/cart/items/1")
            .body_json(&json!({ "quantity": 0 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.json()
            .await
            .value()
            .object()
            .get("item_count")
            .assert_i64(1);
    }

    #[tokio::test]
    async fn should_accept_numeric_product_id_when_adding() {
        let cli = test_client();

        let resp = cli
            .post("/cart/items")
            .body_json(&json!({ "product_id": 1, "quantity": 2 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("item_count").assert_i64(2);
        cart.get("items").array().get(0).object().get("id").assert_string("1");
    }

    #[tokio::test]
    async fn should_reject_add_when_product_is_out_of_stock() {
        let cli = test_client();

        let resp = cli
            .post("/cart/items")
            .body_json(&json!({ "product_id": "5" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_return_no_content_when_removing_absent_item() {
        let cli = test_client();

        let resp = cli.delete("/cart/items/42").send().await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn should_reject_checkout_when_cart_is_empty() {
        let cli = test_client();

        let resp = cli
            .post("/checkout")
            .body_json(&json!({
                "first_name": "Ada",
                "email": "ada@example.com",
                "address": "1 Main St"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_place_order_and_clear_cart_when_checkout_succeeds() {
        let cli = test_client();
        cli.post("/cart/items")
            .body_json(&json!({ "product_id": "e39", "quantity": 2 }))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .post("/checkout")
            .body_json(&json!({
                "first_name": "Ada",
                "email": "ada@example.com",
                "address": "1 Main St"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let confirmation = json.value().object();
        confirmation.get("item_count").assert_i64(2);
        confirmation.get("total").assert_string("3798");

        let cart = cli.get("/cart").send().await;
        cart.json()
            .await
            .value()
            .object()
            .get("item_count")
            .assert_i64(0);
    }

    #[tokio::test]
    async fn should_reject_checkout_when_email_is_malformed() {
        let cli = test_client();
        cli.post("/cart/items")
            .body_json(&json!({ "product_id": "3" }))
            .send()
            .await
            .assert_status_is_ok();

        let resp = cli
            .post("/checkout")
            .body_json(&json!({
                "first_name": "Ada",
                "email": "not-an-email",
                "address": "1 Main St"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
