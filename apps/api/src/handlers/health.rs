use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream = if state.proxy_service.is_configured() {
        "live"
    } else {
        "fallback"
    };

    Json(HealthResponse {
        status: "ok",
        upstream,
    })
}
