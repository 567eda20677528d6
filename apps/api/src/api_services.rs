use std::sync::Arc;

use complaintdesk_application::{ProxyService, UpstreamGateway};
use complaintdesk_core::AppError;
use complaintdesk_infrastructure::ReqwestUpstreamGateway;
use tracing::{info, warn};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let gateway: Option<Arc<dyn UpstreamGateway>> = match config.upstream_base_url.as_deref() {
        Some(base_url) => {
            let gateway = ReqwestUpstreamGateway::new(base_url, config.upstream_timeout())?;
            info!(
                upstream = base_url,
                timeout_ms = config.upstream_timeout_ms,
                "forwarding to upstream API"
            );
            Some(Arc::new(gateway))
        }
        None => {
            warn!("UPSTREAM_API_BASE_URL is not set; every route serves its fallback payload");
            None
        }
    };

    Ok(AppState {
        proxy_service: ProxyService::new(gateway, config.demo_login_enabled),
    })
}
