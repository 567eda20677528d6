//! Application services and ports.

#![forbid(unsafe_code)]

mod admin_workspace;
mod api_client;
mod auth_repository;
mod complaint_store;
mod complaints_repository;
mod master_data_store;
mod masters_repository;
mod mount_guard;
mod ports;
mod session_service;
mod wire;

pub mod endpoints;
pub mod envelope;
pub mod proxy_service;

#[cfg(test)]
mod test_support;

pub use admin_workspace::{AdminWorkspace, WorkspaceOpened};
pub use api_client::ApiClient;
pub use auth_repository::{AuthRepository, RegisterInput, parse_login_data};
pub use complaint_store::ComplaintStore;
pub use complaints_repository::{ComplaintsRepository, DEFAULT_LIST_ROLE};
pub use envelope::{Envelope, EnvelopeShape};
pub use master_data_store::{Capability, MasterData, MasterDataStore, MasterOperation};
pub use masters_repository::MastersRepository;
pub use mount_guard::{LoadOutcome, MountGuard, MountToken};
pub use ports::{
    ApiRequest, ApiTransport, HttpMethod, SessionStore, UpstreamGateway, UpstreamReply,
    UpstreamRequest,
};
pub use proxy_service::{
    FallbackReason, InboundRequest, ProxyOutcome, ProxyRoute, ProxyService,
};
pub use session_service::{LoginResult, SessionService};
