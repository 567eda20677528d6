//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod base_url;
mod file_session_store;
mod in_memory_api_transport;
mod in_memory_session_store;
mod reqwest_api_transport;
mod reqwest_upstream_gateway;

pub use base_url::normalize_base_url;
pub use file_session_store::FileSessionStore;
pub use in_memory_api_transport::InMemoryApiTransport;
pub use in_memory_session_store::InMemorySessionStore;
pub use reqwest_api_transport::ReqwestApiTransport;
pub use reqwest_upstream_gateway::ReqwestUpstreamGateway;
