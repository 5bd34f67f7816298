//! Flag Resolver: fetch `{a, b}`, derive the two-stage commitment, compare
//! against the embedded target, cache the boolean forever.

use std::sync::Arc;

use lg_core::{
    flag::{FlagSource, FLAG_COMMITMENT_TARGET},
    ports::{RemoteClientPort, RemoteRequest},
    RemoteConfigError, StorageError,
};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::identity::IdentityStore;
use crate::single_flight::{OperationKind, SingleFlight};

#[derive(Debug, thiserror::Error)]
pub enum FlagResolveError {
    #[error("flag storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    RemoteConfig(#[from] RemoteConfigError),

    #[error("flag resolution already in flight")]
    AlreadyInFlight,
}

pub struct ResolveFlag {
    identity: IdentityStore,
    remote: Arc<dyn RemoteClientPort>,
    endpoint: String,
    single_flight: Arc<SingleFlight>,
    target: String,
}

impl ResolveFlag {
    pub fn new(
        identity: IdentityStore,
        remote: Arc<dyn RemoteClientPort>,
        endpoint: impl Into<String>,
        single_flight: Arc<SingleFlight>,
    ) -> Self {
        Self {
            identity,
            remote,
            endpoint: endpoint.into(),
            single_flight,
            target: FLAG_COMMITMENT_TARGET.to_string(),
        }
    }

    /// Replace the embedded commitment target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Return the cached flag, or resolve it remotely once and cache it.
    ///
    /// A remote failure leaves the cache empty so a later run can retry.
    pub async fn execute(&self) -> Result<bool, FlagResolveError> {
        let span = info_span!("usecase.resolve_flag.execute");

        async {
            if let Some(cached) = self.identity.flag()? {
                debug!(flag = cached, "using cached flag");
                return Ok(cached);
            }

            let Some(_guard) = self.single_flight.try_acquire(OperationKind::FlagResolve) else {
                return Err(FlagResolveError::AlreadyInFlight);
            };

            // A concurrent run may have cached it while we waited for the claim.
            if let Some(cached) = self.identity.flag()? {
                return Ok(cached);
            }

            let source = self.fetch_source().await?;
            let flag = source.evaluate(&self.target);

            self.identity.set_flag(flag)?;
            info!(flag, "flag resolved and cached");
            Ok(flag)
        }
        .instrument(span)
        .await
    }

    async fn fetch_source(&self) -> Result<FlagSource, RemoteConfigError> {
        let response = self
            .remote
            .get(RemoteRequest::get(&self.endpoint))
            .await
            .map_err(|e| {
                warn!(error = %e, "flag source transport failed");
                RemoteConfigError::from(e)
            })?;

        if !response.is_ok() {
            warn!(status = response.status, "flag source returned non-200");
            return Err(RemoteConfigError::Unreachable(format!(
                "invalid response status code {}",
                response.status
            )));
        }

        FlagSource::from_response_body(&response.body)
    }
}
