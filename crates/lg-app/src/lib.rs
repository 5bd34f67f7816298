//! Launchgate Application Orchestration Layer
//!
//! This crate contains the launch-time use cases (identity, trust check,
//! flag resolution, self-update) and their orchestration.

pub mod app_paths;
pub mod context;
pub mod deps;
pub mod identity;
pub mod single_flight;
pub mod usecase_factory;
pub mod usecases;

pub use context::{AppContext, RemoteEndpoints};
pub use deps::AppDeps;
pub use identity::IdentityStore;
pub use single_flight::{OperationKind, SingleFlight, SingleFlightGuard};
pub use usecase_factory::UseCases;
