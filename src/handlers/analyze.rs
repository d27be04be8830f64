use axum::{extract::State, Json};
use log::info;
use serde_json::Value;

use crate::error::AnalyzeError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, App};
use crate::services::{compare, fetch_page_metrics, scrape_page_metrics};

/// Run both analyzers against a URL and report the relative savings.
///
/// The two fetches run strictly sequentially: the raw fetch completes before
/// the Firecrawl call begins. Either failure aborts the request; the client
/// never sees a partial `before`/`after` pair.
pub async fn analyze(
    State(app): State<App>,
    body: Option<Json<Value>>,
) -> Result<Json<AnalyzeResponse>, AnalyzeError> {
    let Some(Json(body)) = body else {
        return Err(AnalyzeError::InvalidPayload("invalid JSON payload".into()));
    };

    let req: AnalyzeRequest =
        serde_json::from_value(body).map_err(|e| AnalyzeError::InvalidPayload(e.to_string()))?;

    if req.url.trim().is_empty() {
        return Err(AnalyzeError::MissingUrl);
    }

    info!("🔎 Processing URL: {}", req.url);

    let before = fetch_page_metrics(&app, &req.url).await?;
    let after = scrape_page_metrics(&app, &req.url, req.api_key.as_deref()).await?;
    let savings = compare(&before, &after);

    info!(
        "✅ Analysis complete: {} -> {} bytes ({}x)",
        before.size, after.size, savings.multiplier
    );

    Ok(Json(AnalyzeResponse {
        before,
        after,
        savings,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{App, AppConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use std::{sync::Arc, time::Duration};
    use tower::ServiceExt;

    /// Test router whose outbound endpoints point at a closed local port, so
    /// any fetch fails fast with a connection error.
    fn test_app() -> Router {
        let config = AppConfig {
            firecrawl_url: "http://127.0.0.1:1/v1/scrape".into(),
            firecrawl_key: "fc-test".into(),
            cost_per_1k_tokens: 0.0025,
            fetch_timeout: Duration::from_secs(2),
            firecrawl_timeout: Duration::from_secs(2),
            port: 0,
        };
        let app = App {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        };
        Router::new().route("/analyze", post(analyze)).with_state(app)
    }

    async fn post_json(router: Router, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn empty_url_is_rejected() {
        let (status, body) = post_json(test_app(), r#"{"url":""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_url_key_is_rejected() {
        let (status, body) = post_json(test_app(), r#"{}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let (status, body) = post_json(test_app(), "not json at all").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected() {
        let (status, body) =
            post_json(test_app(), r#"{"url":"https://example.com","mode":"turbo"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unreachable_host_returns_error_without_partial_results() {
        let (status, body) = post_json(test_app(), r#"{"url":"http://127.0.0.1:1/"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
        assert!(body.get("before").is_none());
        assert!(body.get("after").is_none());
    }
}
