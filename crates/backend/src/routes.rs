use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // TABS & CALLBACKS
        // ========================================
        .route("/api/tabs", get(handlers::tabs::list))
        .route("/api/tabs/:tab_id", get(handlers::tabs::get_by_id))
        .route("/api/callback", post(handlers::callbacks::dispatch))
        // ========================================
        // DASHBOARD CHARTS
        // ========================================
        // D400 Global sales
        .route(
            "/api/d400/revenue_by_month",
            get(handlers::d400_global_sales::revenue_by_month),
        )
        .route(
            "/api/d400/revenue_by_country",
            get(handlers::d400_global_sales::revenue_by_country),
        )
        // D401 Products
        .route(
            "/api/d401/subcategories_by_gender",
            get(handlers::d401_products::subcategories_by_gender),
        )
        .route(
            "/api/d401/category_share",
            get(handlers::d401_products::category_share),
        )
        // D402 Sales channels
        .route(
            "/api/d402/weekday",
            get(handlers::d402_sales_channels::weekday),
        )
        .route(
            "/api/d402/countries",
            get(handlers::d402_sales_channels::countries),
        )
        .route(
            "/api/d402/gender",
            get(handlers::d402_sales_channels::gender),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::shared::callback::CallbackResponse;
    use contracts::shared::chart::{Figure, Trace};
    use contracts::shared::layout::{TabInfo, TabLayout};
    use tower::ServiceExt;

    use crate::shared::data::dataset::test_support::sample_dataset;

    fn app() -> Router {
        configure_routes(AppState::new(sample_dataset()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(uri: &str) -> (StatusCode, Option<T>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).ok())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_tabs_listing_and_layout() {
        let (status, tabs) = get_json::<Vec<TabInfo>>("/api/tabs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(tabs.unwrap().len(), 3);

        let (status, layout) = get_json::<TabLayout>("/api/tabs/tab-2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(layout.unwrap().title, "Produkty");

        let (status, _) = get_json::<TabLayout>("/api/tabs/tab-7").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_revenue_by_month_endpoint() {
        let (status, figure) = get_json::<Figure>(
            "/api/d400/revenue_by_month?start_date=2011-01-01&end_date=2011-01-31",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let figure = figure.unwrap();
        assert_eq!(figure.data.len(), 2);
        assert!(matches!(figure.data[0], Trace::Bar(_)));
    }

    #[tokio::test]
    async fn test_bad_date_is_client_error() {
        let (status, _) = get_json::<Figure>(
            "/api/d400/revenue_by_country?start_date=someday&end_date=2011-01-31",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json::<Figure>("/api/d400/revenue_by_country").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_channel_gives_empty_chart() {
        let (status, figure) = get_json::<Figure>("/api/d402/gender?channel=Kiosk").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(figure.unwrap().point_count(), 0);
    }

    #[tokio::test]
    async fn test_callback_endpoint() {
        let body = r#"{"control_id": "prod-dropdown", "value": "Clothing"}"#;
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/callback")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: CallbackResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.updates.len(), 1);
        assert_eq!(parsed.updates[0].output_id, "barh-prod-subcat");
        assert_eq!(parsed.updates[0].figure.point_count(), 4);
    }

    #[tokio::test]
    async fn test_callback_unknown_control() {
        let body = r#"{"control_id": "ghost", "value": "x"}"#;
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/callback")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_callback_without_value_is_bad_request() {
        for body in [r#"{"control_id": "sales-range"}"#, "not json"] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/callback")
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        }
    }
}
