mod routes;

pub use routes::{router, AppState};

use crate::anthropic::AnthropicClient;
use crate::config::{RelayConfig, ServeOptions};
use crate::prelude::{eprintln, *};
use colored::Colorize;
use std::sync::Arc;

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = RelayConfig::try_from(options)?;
    let client = AnthropicClient::new(&config)?;
    let addr = config.addr();

    if global.verbose {
        eprintln!("Anthropic API: {}", config.anthropic_url);
        eprintln!("Body limit: {} bytes", config.body_limit_bytes);
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        client,
    });
    let app_router = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!(
        "Vision relay running on {}",
        f!("http://{addr}").green().bold()
    );
    log::info!("Model: {}", config.model.cyan());
    log::info!("Endpoints:");
    log::info!("  {}  /health", "GET".bold());
    log::info!("  {} /analyze", "POST".bold());

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
