use axum::Router;
use axum::http::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use complaintdesk_application::endpoints::app;
use complaintdesk_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

#[cfg(test)]
mod tests;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT_LANGUAGE]);

    let auth_routes = Router::new()
        .route(app::LOGIN, post(handlers::auth::login_handler))
        .route(app::REGISTER, post(handlers::auth::register_handler));

    let complaint_routes = Router::new()
        .route(
            app::COMPLAINTS,
            get(handlers::complaints::list_complaints_handler)
                .post(handlers::complaints::list_complaints_handler),
        )
        .route(
            app::CREATE_COMPLAINT,
            post(handlers::complaints::create_complaint_handler),
        )
        .route(
            app::ASSIGN_ENGINEER,
            post(handlers::complaints::assign_engineer_handler),
        )
        .route(
            app::DELETE_COMPLAINT,
            post(handlers::complaints::delete_complaint_handler),
        );

    let master_routes = Router::new()
        .route(
            app::CUSTOMERS,
            get(handlers::masters::list_customers_handler),
        )
        .route(
            app::SAVE_CUSTOMER,
            post(handlers::masters::save_customer_handler),
        )
        .route(
            app::ENGINEERS,
            get(handlers::masters::list_engineers_handler),
        )
        .route(
            app::SAVE_ENGINEER,
            post(handlers::masters::save_engineer_handler),
        )
        .route(app::USERS, get(handlers::masters::list_users_handler))
        .route(app::SAVE_USER, post(handlers::masters::save_user_handler))
        .route(app::ROLES, get(handlers::masters::list_roles_handler))
        .route(
            app::PERMISSIONS,
            get(handlers::masters::list_permissions_handler),
        )
        .route(
            app::ROLE_PERMISSIONS,
            get(handlers::masters::list_role_permissions_handler),
        )
        .route(
            app::PERMISSIONS_BY_ROLE,
            post(handlers::masters::permissions_by_role_handler),
        )
        .route(
            app::SAVE_ROLE_PERMISSIONS,
            post(handlers::masters::save_role_permissions_handler),
        )
        .route(
            app::USER_ROLES,
            get(handlers::masters::list_user_roles_handler),
        )
        .route(
            app::NATURE_OF_COMPLAINT,
            get(handlers::masters::list_nature_of_complaint_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(auth_routes)
        .merge(complaint_routes)
        .merge(master_routes)
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
