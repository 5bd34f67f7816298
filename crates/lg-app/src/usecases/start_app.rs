//! Use case for the application start event.
//! 应用启动用例：按顺序执行窗口恢复、身份、信任检查、标志解析、更新检查。
//!
//! Every step degrades independently: a failing step is logged and the
//! remaining steps still run. Nothing here terminates the process except an
//! accepted install.

use std::sync::Arc;

use lg_core::{
    ids::IdentityToken, ports::WindowPort, trust::TrustClassification, update::UpdateOutcome,
};
use tracing::{error, info, info_span, warn, Instrument};

use crate::identity::IdentityStore;
use crate::usecases::{CheckToken, ResolveFlag, UpdateCoordinator};

/// What happened during startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupReport {
    pub geometry_restored: bool,
    pub token: Option<IdentityToken>,
    pub trust: Option<TrustClassification>,
    pub flag: Option<bool>,
    pub update: UpdateOutcome,
}

pub struct StartApp {
    identity: IdentityStore,
    window: Arc<dyn WindowPort>,
    check_token: CheckToken,
    resolve_flag: ResolveFlag,
    update: UpdateCoordinator,
}

impl StartApp {
    pub fn new(
        identity: IdentityStore,
        window: Arc<dyn WindowPort>,
        check_token: CheckToken,
        resolve_flag: ResolveFlag,
        update: UpdateCoordinator,
    ) -> Self {
        Self {
            identity,
            window,
            check_token,
            resolve_flag,
            update,
        }
    }

    pub async fn execute(&self) -> StartupReport {
        let span = info_span!("usecase.start_app.execute");

        async {
            let geometry_restored = self.restore_geometry();

            let token = match self.identity.get_or_create_token() {
                Ok(token) => Some(token),
                Err(e) => {
                    error!(error = %e, "failed to establish install identity");
                    None
                }
            };

            let trust = match &token {
                Some(token) => match self.check_token.execute(token).await {
                    Ok(classification) => Some(classification),
                    Err(e) => {
                        warn!(error = %e, "trust check abandoned");
                        None
                    }
                },
                None => None,
            };

            let flag = match self.resolve_flag.execute().await {
                Ok(flag) => Some(flag),
                Err(e) => {
                    warn!(error = %e, "flag unresolved for this run");
                    None
                }
            };

            let update = self.update.run().await;

            info!(
                geometry_restored,
                has_token = token.is_some(),
                has_trust = trust.is_some(),
                flag_resolved = flag.is_some(),
                "startup finished"
            );

            StartupReport {
                geometry_restored,
                token,
                trust,
                flag,
                update,
            }
        }
        .instrument(span)
        .await
    }

    fn restore_geometry(&self) -> bool {
        match self.identity.geometry() {
            Ok(Some(geometry)) => {
                self.window.apply_geometry(&geometry);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "stored window geometry unreadable, using defaults");
                false
            }
        }
    }
}
