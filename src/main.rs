use launchgate_lib::bootstrap::{self, load_or_default, resolve_config_path, run_app};
use lg_app::app_paths::AppPaths;
use lg_core::{config::AppConfig, ports::AppDirsPort};
use lg_platform::DirsAppDirsAdapter;
use tracing::{error, info};

fn main() {
    let app_dirs = match DirsAppDirsAdapter::new().get_app_dirs() {
        Ok(dirs) => dirs,
        Err(e) => {
            eprintln!("Failed to resolve application directories: {e}");
            std::process::exit(1);
        }
    };
    let paths = AppPaths::from_app_dirs(&app_dirs);

    if let Err(e) = bootstrap::tracing::init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config_path = resolve_config_path(&paths.config_path);
    let config = match load_or_default(config_path.clone(), app_dirs.app_data_root.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %config_path.display(), error = %e, "failed to load config, using defaults");
            AppConfig::with_system_defaults(app_dirs.app_data_root.clone())
        }
    };
    info!(config = %config_path.display(), version = env!("CARGO_PKG_VERSION"), "starting");

    let code = match run_app(config, paths) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "launch failed");
            1
        }
    };
    std::process::exit(code);
}
