//! Joke Generator Server Entry Point

use clap::Parser;
use joke_generator::cli::{Cli, Commands};
use joke_generator::config::AppConfig;
use joke_generator::{logging, server, AppState};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = AppConfig::from_env();
    if let Some(Commands::Serve(args)) = cli.command {
        args.apply(&mut config);
    }

    info!("Joke Generator v{}", env!("CARGO_PKG_VERSION"));
    info!(
        joke_api = %config.joke_api_url,
        dad_joke_api = %config.dad_joke_api_url,
        static_dir = %config.static_dir.display(),
        "Upstream providers configured"
    );

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    info!("🎭 Joke Generator running on {}", config.local_url());

    if let Err(e) = server::run(state, &config.bind_addr()).await {
        error!("Server error on {}: {}", config.bind_addr(), e);
        std::process::exit(1);
    }
}
