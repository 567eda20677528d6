use std::time::Duration;

use async_trait::async_trait;
use complaintdesk_application::{HttpMethod, UpstreamGateway, UpstreamReply, UpstreamRequest};
use complaintdesk_core::{AppError, AppResult};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::base_url::normalize_base_url;

/// Forwards proxy requests to the upstream REST API.
#[derive(Clone)]
pub struct ReqwestUpstreamGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl ReqwestUpstreamGateway {
    /// Creates a gateway for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    fn url_for(&self, request: &UpstreamRequest) -> String {
        match request.query.as_deref() {
            Some(query) if !query.is_empty() => {
                format!("{}{}?{query}", self.base_url, request.path)
            }
            _ => format!("{}{}", self.base_url, request.path),
        }
    }
}

#[async_trait]
impl UpstreamGateway for ReqwestUpstreamGateway {
    async fn forward(&self, request: UpstreamRequest) -> AppResult<UpstreamReply> {
        let url = self.url_for(&request);
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .http_client
            .request(method, url.as_str())
            .header(ACCEPT, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body.as_ref() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .json(body);
        }

        let response = builder.send().await.map_err(|error| {
            if error.is_timeout() {
                AppError::Network(format!("upstream timed out: {url}"))
            } else {
                AppError::Network(format!("upstream request failed: {error}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|error| AppError::Network(format!("upstream body unreadable: {error}")))?;
        debug!(url = %url, status, "upstream replied");

        Ok(UpstreamReply {
            status,
            body: body.to_vec(),
        })
    }
}
