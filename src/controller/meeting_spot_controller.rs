use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::json;
use tracing::{debug, warn};
use crate::controller::AppState;
use crate::models::meeting_request::MeetingRequest;
use crate::services::meeting_spot_finder::MeetingSpotFinder;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/find", post(find_meeting_spots))
        .route_layer(Extension(app_state.finder))
}

pub async fn find_meeting_spots(
    Extension(finder): Extension<Arc<MeetingSpotFinder>>,
    Json(body): Json<MeetingRequest>,
) -> impl IntoResponse {
    if !body.has_both_addresses() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Both address1 and address2 are required" }))
        ).into_response();
    }

    debug!("Finding spots for {} between {} and {}", body.purpose_or_default(), body.address1, body.address2);
    let find_res = finder.find(&body).await;

    return match find_res {
        Ok(places) => {
            (StatusCode::OK, Json(places)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong finding meeting spots due to: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to find meeting spots, please try again" }))
            ).into_response()
        }
    };
}
