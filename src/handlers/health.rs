use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::models::App;

/// Health check endpoint
pub async fn health_check(State(app): State<App>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "firecrawl_url": app.config.firecrawl_url,
    }))
}
