use complaintdesk_application::ProxyService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub proxy_service: ProxyService,
}
