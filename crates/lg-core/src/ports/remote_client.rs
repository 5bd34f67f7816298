use async_trait::async_trait;

use crate::errors::TransportError;

/// A JSON GET against a remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RemoteRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Raw response: status is interpreted by the caller, not the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RemoteResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Shared HTTP requester.
///
/// Implementations attach the client identifier header to every request and
/// bound every call with a timeout (expiry is [`TransportError::Timeout`]).
#[async_trait]
pub trait RemoteClientPort: Send + Sync {
    async fn get(&self, request: RemoteRequest) -> Result<RemoteResponse, TransportError>;
}
