use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use complaintdesk_core::AppError;
use complaintdesk_infrastructure::normalize_base_url;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub upstream_base_url: Option<String>,
    pub upstream_timeout_ms: u64,
    pub demo_login_enabled: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = lookup("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());

        let upstream_base_url = lookup("UPSTREAM_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                normalize_base_url(value.as_str()).map_err(|error| {
                    AppError::Validation(format!(
                        "invalid UPSTREAM_API_BASE_URL: {}",
                        error.user_message()
                    ))
                })
            })
            .transpose()?;

        let upstream_timeout_ms = lookup("UPSTREAM_TIMEOUT_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(10_000);
        let demo_login_enabled = lookup("DEMO_LOGIN_ENABLED")
            .unwrap_or_else(|| "true".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            upstream_base_url,
            upstream_timeout_ms,
            demo_login_enabled,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
