//! Login and self-registration over the proxy surface.

use complaintdesk_core::{AppError, AppResult};
use complaintdesk_domain::SessionUser;
use serde_json::{Value, json};

use crate::ApiClient;
use crate::endpoints::app;

mod login_payload;


pub use login_payload::parse_login_data;

/// Self-registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterInput {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password, forwarded as-is.
    pub password: String,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Repository for the authentication endpoints.
#[derive(Clone)]
pub struct AuthRepository {
    client: ApiClient,
}

impl AuthRepository {
    /// Creates a repository over the shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a session.
    ///
    /// Fails when the backend reports failure or when the payload carries
    /// neither an email nor any permission names.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<SessionUser> {
        let envelope = self
            .client
            .post_envelope(
                app::LOGIN,
                json!({ "email": email.trim(), "password": password }),
            )
            .await?;

        let failure_message = envelope
            .message
            .clone()
            .unwrap_or_else(|| "Login failed".to_owned());
        if !envelope.success {
            return Err(AppError::Rejected(failure_message));
        }

        let session = match parse_login_data(&envelope.data) {
            Ok(session) => session,
            Err(AppError::Validation(reason)) => {
                tracing::warn!(%reason, "unrecognized login payload");
                return Err(AppError::Rejected(failure_message));
            }
            Err(error) => return Err(error),
        };

        if session.email.is_empty() && session.permission_names.is_empty() {
            return Err(AppError::Rejected(failure_message));
        }

        Ok(session)
    }

    /// Registers a new account and returns the resulting session record.
    pub async fn register(&self, input: RegisterInput) -> AppResult<SessionUser> {
        let envelope = self
            .client
            .post_envelope(
                app::REGISTER,
                json!({
                    "name": input.name.trim(),
                    "emailId": input.email.trim(),
                    "password": input.password,
                    "mobileNumber": input.mobile_number,
                    "address": input.address,
                }),
            )
            .await?;

        let data = envelope.into_data()?;
        if data == Value::Null {
            return Err(AppError::Rejected("Registration failed".to_owned()));
        }

        parse_login_data(&data)
    }
}
