mod cli;
mod routes;

pub use cli::ServeOptions;
pub use routes::router;

use crate::config::ProviderConfig;
use crate::prelude::{eprintln, *};
use crate::provider::HttpProvider;
use crate::service::JokeService;
use std::sync::Arc;

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ProviderConfig::from_global(&global)?;
    let provider = HttpProvider::new(&config)?;

    if global.verbose {
        eprintln!("Joke provider: {}", provider.base_url());
        eprintln!("Provider timeout: {}s", config.timeout.as_secs());
    }

    let service = Arc::new(JokeService::new(provider));
    let app_router = router(service);

    let addr = format!("{}:{}", options.host, options.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    log::info!("Listening on http://{addr}");
    if global.verbose {
        eprintln!("Meow Norris Joke API listening on http://{}", addr);
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    log::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
