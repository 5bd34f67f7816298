use std::time::Duration;

use lg_app::app_paths::AppPaths;
use lg_core::config::AppConfig;
use tracing::{error, info, warn};

use super::wiring::{wire_dependencies, WiredApp};

/// Time allowed for in-flight work to unwind after an interrupt.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

pub fn create_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("launchgate")
        .build()?)
}

/// Run one launch sequence and return the process exit code.
pub fn run_app(config: AppConfig, paths: AppPaths) -> anyhow::Result<i32> {
    let runtime = create_runtime()?;
    let running_version = env!("CARGO_PKG_VERSION");

    let code = runtime.block_on(async {
        let wired = wire_dependencies(&config, &paths, running_version)?;
        Ok::<i32, anyhow::Error>(launch(wired).await)
    })?;

    // A prompt may still be blocked on stdin.
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(code)
}

async fn launch(wired: WiredApp) -> i32 {
    let shutdown = wired.usecases.context().shutdown.clone();

    let interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, shutting down");
            interrupt.cancel();
        }
    });

    let start_app = wired.usecases.start_app();
    let report = tokio::select! {
        report = start_app.execute() => Some(report),
        _ = async {
            shutdown.cancelled().await;
            tokio::time::sleep(SHUTDOWN_GRACE).await;
        } => None,
    };

    match &report {
        Some(report) => info!(
            token = report.token.is_some(),
            trust = ?report.trust.as_ref().map(|t| &t.kind),
            flag = ?report.flag,
            update = ?report.update,
            "launch sequence finished"
        ),
        None => warn!("launch sequence abandoned after interrupt"),
    }

    if let Err(e) = wired
        .usecases
        .shutdown_app()
        .execute(wired.window.current())
    {
        error!(error = %e, "failed to persist window geometry");
    }

    wired.lifecycle.requested_exit().unwrap_or(0)
}
