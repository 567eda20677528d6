use axum::extract::State;
use complaintdesk_application::proxy_service::routes;

use crate::handlers::proxy::{Inbound, ProxyResponse};
use crate::state::AppState;

pub async fn list_complaints_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::COMPLAINTS, request)
        .await
        .into()
}

pub async fn create_complaint_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::CREATE_COMPLAINT, request)
        .await
        .into()
}

pub async fn assign_engineer_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::ASSIGN_ENGINEER, request)
        .await
        .into()
}

pub async fn delete_complaint_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::DELETE_COMPLAINT, request)
        .await
        .into()
}
