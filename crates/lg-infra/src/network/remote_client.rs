use std::time::Duration;

use async_trait::async_trait;
use lg_core::{
    ports::{RemoteClientPort, RemoteRequest, RemoteResponse},
    TransportError,
};
use tracing::{debug, warn};

/// `<product>/<version>` client identifier sent on every request.
pub fn user_agent(product_name: &str, version: &str) -> String {
    format!("{product_name}/{version}")
}

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub user_agent: String,
    /// Whole-request bound for JSON calls; connect bound for downloads.
    pub request_timeout: Duration,
    /// Maximum wait for the next chunk of a download.
    pub download_read_timeout: Duration,
}

/// reqwest-backed [`RemoteClientPort`].
pub struct ReqwestRemoteClient {
    client: reqwest::Client,
}

impl ReqwestRemoteClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("build HTTP client failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteClientPort for ReqwestRemoteClient {
    async fn get(&self, request: RemoteRequest) -> Result<RemoteResponse, TransportError> {
        debug!(url = %request.url, "GET");
        let response = self
            .client
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(url = %request.url, status, len = body.len(), "GET finished");

        Ok(RemoteResponse {
            status,
            body: body.to_vec(),
        })
    }
}

pub(crate) fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        warn!(error = %error, "connection failed");
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}
