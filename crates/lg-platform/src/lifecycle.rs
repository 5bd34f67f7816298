use std::sync::Mutex;

use lg_core::ports::AppLifecyclePort;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Records the requested exit code and cancels `shutdown`; the binary exits
/// with that code once the launch sequence returns.
pub struct ProcessLifecycle {
    shutdown: CancellationToken,
    exit_code: Mutex<Option<i32>>,
}

impl ProcessLifecycle {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self {
            shutdown,
            exit_code: Mutex::new(None),
        }
    }

    pub fn requested_exit(&self) -> Option<i32> {
        match self.exit_code.lock() {
            Ok(code) => *code,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl AppLifecyclePort for ProcessLifecycle {
    fn request_exit(&self, code: i32) {
        info!(code, "exit requested");
        match self.exit_code.lock() {
            Ok(mut slot) => *slot = Some(code),
            Err(poisoned) => *poisoned.into_inner() = Some(code),
        }
        self.shutdown.cancel();
    }
}
