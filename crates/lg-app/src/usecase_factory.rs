//! Factory functions for creating use cases with AppDeps
//! 使用 AppDeps 创建用例的工厂函数

use crate::context::AppContext;
use crate::deps::AppDeps;
use crate::identity::IdentityStore;
use crate::usecases::{
    CheckToken, ResolveFlag, ShutdownApp, StartApp, UpdateCoordinator, UpdatePorts,
};

/// Use-case accessor built from the application context and its ports.
pub struct UseCases {
    ctx: AppContext,
    deps: AppDeps,
}

impl UseCases {
    pub fn new(ctx: AppContext, deps: AppDeps) -> Self {
        Self { ctx, deps }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn identity(&self) -> IdentityStore {
        IdentityStore::new(self.deps.store.clone())
    }

    pub fn check_token(&self) -> CheckToken {
        CheckToken::new(
            self.deps.remote.clone(),
            self.ctx.endpoints.trust_check.clone(),
        )
    }

    pub fn resolve_flag(&self) -> ResolveFlag {
        ResolveFlag::new(
            self.identity(),
            self.deps.remote.clone(),
            self.ctx.endpoints.flag_source.clone(),
            self.ctx.single_flight.clone(),
        )
    }

    pub fn update_coordinator(&self) -> UpdateCoordinator {
        UpdateCoordinator::new(
            self.ctx.clone(),
            UpdatePorts {
                remote: self.deps.remote.clone(),
                downloader: self.deps.downloader.clone(),
                prompt: self.deps.prompt.clone(),
                installer: self.deps.installer.clone(),
                lifecycle: self.deps.lifecycle.clone(),
            },
        )
    }

    pub fn start_app(&self) -> StartApp {
        StartApp::new(
            self.identity(),
            self.deps.window.clone(),
            self.check_token(),
            self.resolve_flag(),
            self.update_coordinator(),
        )
    }

    pub fn shutdown_app(&self) -> ShutdownApp {
        ShutdownApp::new(self.identity(), self.ctx.shutdown.clone())
    }
}
