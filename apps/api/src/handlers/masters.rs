use axum::extract::State;
use complaintdesk_application::proxy_service::routes;

use crate::handlers::proxy::{Inbound, ProxyResponse};
use crate::state::AppState;

pub async fn list_customers_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::CUSTOMERS, request)
        .await
        .into()
}

pub async fn save_customer_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::SAVE_CUSTOMER, request)
        .await
        .into()
}

pub async fn list_engineers_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::ENGINEERS, request)
        .await
        .into()
}

pub async fn save_engineer_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::SAVE_ENGINEER, request)
        .await
        .into()
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::USERS, request)
        .await
        .into()
}

pub async fn save_user_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::SAVE_USER, request)
        .await
        .into()
}

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::ROLES, request)
        .await
        .into()
}

pub async fn list_permissions_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::PERMISSIONS, request)
        .await
        .into()
}

pub async fn list_role_permissions_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::ROLE_PERMISSIONS, request)
        .await
        .into()
}

pub async fn permissions_by_role_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::PERMISSIONS_BY_ROLE, request)
        .await
        .into()
}

pub async fn save_role_permissions_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::SAVE_ROLE_PERMISSIONS, request)
        .await
        .into()
}

pub async fn list_user_roles_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::USER_ROLES, request)
        .await
        .into()
}

pub async fn list_nature_of_complaint_handler(
    State(state): State<AppState>,
    Inbound(request): Inbound,
) -> ProxyResponse {
    state
        .proxy_service
        .forward(&routes::NATURE_OF_COMPLAINT, request)
        .await
        .into()
}
