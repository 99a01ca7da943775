//! reqwest-backed transport

use super::{Method, Transport, TransportRequest, TransportResponse};
use crate::{Result, config::settings::ApiSettings, utils::version};
use async_trait::async_trait;
use reqwest::Client;

/// Default [`Transport`] over a pooled [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// HTTP client; owns the connection pool
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured timeout and user agent
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(version::user_agent);

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(settings.timeout())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        // Reading to the end hands the connection back to the pool.
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
