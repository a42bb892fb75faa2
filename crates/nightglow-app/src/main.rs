mod app_state;
mod cli;

use std::process::ExitCode;

use nightglow_config::NightglowConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

/// Pick the log filter: `--log-level`, then `RUST_LOG`, then the config file.
fn log_filter(cli_directive: Option<&str>, config: &NightglowConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(config.logging.directive());
    match cli_directive {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|e| {
            eprintln!("invalid --log-level '{directive}': {e}");
            fallback()
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before the subscriber exists so `[logging]` can set the
    // filter. A load error is reported once logging is up.
    let (config, load_error) = match nightglow_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (NightglowConfig::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.log_level.as_deref(), &config))
        .init();

    tracing::info!("Nightglow v{} starting...", env!("CARGO_PKG_VERSION"));
    match load_error {
        Some(e) => tracing::warn!("Config load failed, using defaults: {e}"),
        None => match args.config.as_deref() {
            Some(path) => tracing::info!("Config loaded from {}", path.display()),
            None => tracing::info!("Config loaded from platform default path"),
        },
    }

    if args.print_config {
        println!("{}", nightglow_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let registry = nightglow_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let paths = app_state::AppPaths::resolve(&config, args.settings, args.assets);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::NightglowApp::new(config, registry, paths);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    if app.init_failed() {
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
