use axum::extract::State;
use complaintdesk_application::proxy_service::routes;

use crate::handlers::proxy::{Inbound, ProxyResponse};
use crate::state::AppState;

pub async fn login_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state.proxy_service.login(request).await.into()
}

pub async fn register_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::REGISTER, request)
        .await
        .into()
}
