//! Server-side forwarding with canned fallbacks.
//!
//! Every route answers either with the upstream response, mirrored verbatim,
//! or with its fallback payload. Callers tell the two apart through
//! [`ProxyOutcome`].

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::ports::{HttpMethod, UpstreamGateway, UpstreamRequest};

pub mod fallback;
pub mod routes;


pub use routes::ProxyRoute;

/// Inbound headers forwarded upstream; everything else is dropped.
pub const FORWARDED_HEADERS: &[&str] = &["authorization", "accept-language", "x-request-id"];

/// Why a fallback was served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No upstream base URL is configured.
    NotConfigured,
    /// The upstream answered with a non-success status.
    UpstreamStatus(u16),
    /// The upstream could not be reached.
    Transport(String),
    /// The upstream answered 2xx with a body that is not JSON.
    MalformedBody(String),
}

impl FallbackReason {
    /// Short machine-readable label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::NotConfigured => "not-configured".to_owned(),
            Self::UpstreamStatus(status) => format!("upstream-status-{status}"),
            Self::Transport(_) => "transport".to_owned(),
            Self::MalformedBody(_) => "malformed-body".to_owned(),
        }
    }
}

impl Display for FallbackReason {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => formatter.write_str("upstream base URL is not configured"),
            Self::UpstreamStatus(status) => write!(formatter, "upstream answered HTTP {status}"),
            Self::Transport(message) => write!(formatter, "upstream unreachable: {message}"),
            Self::MalformedBody(message) => write!(formatter, "upstream body is not JSON: {message}"),
        }
    }
}

/// Two-tier proxy result.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyOutcome {
    /// Genuine upstream response.
    Live {
        /// Upstream status.
        status: u16,
        /// Upstream body.
        body: Value,
    },
    /// Canned payload; always served with status 200.
    Fallback {
        /// Why the upstream response was not used.
        reason: FallbackReason,
        /// Payload.
        body: Value,
    },
}

impl ProxyOutcome {
    /// Status to answer with.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Live { status, .. } => *status,
            Self::Fallback { .. } => 200,
        }
    }

    /// Body to answer with.
    #[must_use]
    pub fn body(&self) -> &Value {
        match self {
            Self::Live { body, .. } | Self::Fallback { body, .. } => body,
        }
    }

    /// Whether this is a degraded answer.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Request received on the proxy surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundRequest {
    /// Verb, mirrored upstream.
    pub method: HttpMethod,
    /// Raw query string without `?`.
    pub query: Option<String>,
    /// Inbound headers with lower-case names.
    pub headers: Vec<(String, String)>,
    /// Parsed JSON body; `None` when absent or unparseable.
    pub body: Option<Value>,
}

/// Application service behind every proxy route.
#[derive(Clone)]
pub struct ProxyService {
    gateway: Option<Arc<dyn UpstreamGateway>>,
    demo_login: bool,
}

impl ProxyService {
    /// Creates a proxy. Without a gateway every route serves its fallback.
    #[must_use]
    pub fn new(gateway: Option<Arc<dyn UpstreamGateway>>, demo_login: bool) -> Self {
        Self {
            gateway,
            demo_login,
        }
    }

    /// Whether an upstream is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.gateway.is_some()
    }

    /// Forwards one request, serving the route fallback on any failure.
    pub async fn forward(&self, route: &ProxyRoute, request: InboundRequest) -> ProxyOutcome {
        match self.try_upstream(route, request).await {
            Ok((status, body)) => {
                debug!(route = route.name, status, "proxied upstream response");
                ProxyOutcome::Live { status, body }
            }
            Err(reason) => {
                warn!(route = route.name, reason = %reason, "serving fallback payload");
                ProxyOutcome::Fallback {
                    reason,
                    body: route.fallback(),
                }
            }
        }
    }

    /// Forwards a login. When the upstream is unavailable and the body carries
    /// an identifier and a password, a demo session is served instead of the
    /// generic login fallback.
    pub async fn login(&self, request: InboundRequest) -> ProxyOutcome {
        let credentials = request.body.as_ref().and_then(demo_identifier);

        let reason = match self.try_upstream(&routes::LOGIN, request).await {
            Ok((status, body)) => {
                debug!(route = routes::LOGIN.name, status, "proxied upstream login");
                return ProxyOutcome::Live { status, body };
            }
            Err(reason) => reason,
        };

        match credentials {
            Some(email_id) if self.demo_login => {
                warn!(reason = %reason, "upstream login unavailable; issuing demo session");
                ProxyOutcome::Fallback {
                    reason,
                    body: fallback::demo_login(email_id.as_str()),
                }
            }
            _ => {
                warn!(reason = %reason, "upstream login unavailable; serving fallback payload");
                ProxyOutcome::Fallback {
                    reason,
                    body: routes::LOGIN.fallback(),
                }
            }
        }
    }

    async fn try_upstream(
        &self,
        route: &ProxyRoute,
        request: InboundRequest,
    ) -> Result<(u16, Value), FallbackReason> {
        let Some(gateway) = self.gateway.as_ref() else {
            return Err(FallbackReason::NotConfigured);
        };

        let upstream_request = UpstreamRequest {
            method: request.method,
            path: route.upstream_path.to_owned(),
            query: request
                .query
                .filter(|query| route.forward_query && !query.is_empty()),
            headers: request
                .headers
                .into_iter()
                .filter(|(name, _)| {
                    FORWARDED_HEADERS
                        .iter()
                        .any(|allowed| name.eq_ignore_ascii_case(allowed))
                })
                .collect(),
            body: request.body,
        };

        let reply = gateway
            .forward(upstream_request)
            .await
            .map_err(|error| FallbackReason::Transport(error.user_message().to_owned()))?;

        if !(200..300).contains(&reply.status) {
            return Err(FallbackReason::UpstreamStatus(reply.status));
        }

        let body = serde_json::from_slice::<Value>(&reply.body)
            .map_err(|error| FallbackReason::MalformedBody(error.to_string()))?;
        Ok((reply.status, body))
    }
}

/// Extracts the login identifier when the body also carries a password.
fn demo_identifier(body: &Value) -> Option<String> {
    let identifier = first_text(body, &["emailId", "email", "Email"])?;
    first_text(body, &["password", "Password"])?;
    Some(identifier)
}

/// First non-empty string under `keys`, returned exactly as submitted.
fn first_text(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    })
}
