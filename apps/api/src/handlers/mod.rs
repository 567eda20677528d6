pub mod auth;
pub mod complaints;
pub mod health;
pub mod masters;
pub mod proxy;

use complaintdesk_core::AppError;

use crate::error::ApiError;

pub async fn not_found_handler() -> ApiError {
    ApiError(AppError::NotFound("no such route".to_owned()))
}
