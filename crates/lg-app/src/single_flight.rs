//! Single-flight guard keyed by operation kind.
//!
//! At most one execution per [`OperationKind`] is in progress at a time. A
//! second trigger while one is in flight is rejected, not queued.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    ManifestCheck,
    FlagResolve,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationKind::ManifestCheck => write!(f, "manifest-check"),
            OperationKind::FlagResolve => write!(f, "flag-resolve"),
        }
    }
}

#[derive(Debug, Default)]
pub struct SingleFlight {
    in_flight: Arc<Mutex<HashSet<OperationKind>>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `kind`. Returns `None` if it is already in flight.
    ///
    /// The claim is released when the returned guard is dropped.
    pub fn try_acquire(&self, kind: OperationKind) -> Option<SingleFlightGuard> {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !in_flight.insert(kind) {
            warn!(operation = %kind, "operation already in flight, rejecting trigger");
            return None;
        }
        Some(SingleFlightGuard {
            kind,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self, kind: OperationKind) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&kind)
    }
}

#[must_use = "the operation is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SingleFlightGuard {
    kind: OperationKind,
    in_flight: Arc<Mutex<HashSet<OperationKind>>>,
}

impl Drop for SingleFlightGuard {
    fn drop(&mut self) {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.remove(&self.kind);
    }
}
