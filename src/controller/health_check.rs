use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::{json, Value};
use crate::controller::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state.environment))
}

/// Liveness only, upstream APIs are not contacted
async fn get_health_check(
    Extension(environment): Extension<String>,
) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "environment": environment,
    }))
}
