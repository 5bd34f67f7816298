//! Trust Client: classify the current identity token.
//! 信任检查：对当前身份令牌进行远端分类。

use std::sync::Arc;

use lg_core::{
    ids::IdentityToken,
    ports::{RemoteClientPort, RemoteRequest},
    trust::TrustClassification,
    RemoteTrustError,
};
use tracing::{info, info_span, warn, Instrument};

/// Single GET against the trust endpoint. No caching, no retry, no side
/// effects.
pub struct CheckToken {
    remote: Arc<dyn RemoteClientPort>,
    endpoint: String,
}

impl CheckToken {
    pub fn new(remote: Arc<dyn RemoteClientPort>, endpoint: impl Into<String>) -> Self {
        Self {
            remote,
            endpoint: endpoint.into(),
        }
    }

    pub async fn execute(
        &self,
        token: &IdentityToken,
    ) -> Result<TrustClassification, RemoteTrustError> {
        let span = info_span!("usecase.check_token.execute");

        async {
            let request = RemoteRequest::get(&self.endpoint).with_query("token", token.as_str());
            let response = self.remote.get(request).await.map_err(|e| {
                warn!(error = %e, "trust check transport failed");
                RemoteTrustError::from(e)
            })?;

            if !response.is_ok() {
                warn!(status = response.status, "trust check returned non-200");
                return Err(RemoteTrustError::Unreachable(format!(
                    "invalid response status code {}",
                    response.status
                )));
            }

            let classification = TrustClassification::from_response_body(&response.body)
                .map_err(|e| {
                    warn!(error = %e, "trust check body malformed");
                    e
                })?;

            info!(kind = %classification.kind, "trust check completed");
            Ok(classification)
        }
        .instrument(span)
        .await
    }
}
