use book_catalog::build_router;
use book_catalog::config::{Config, usage};
use book_catalog::storage::{JsonFileStore, MemoryStore, SharedStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let program = std::env::args().next().unwrap_or_else(|| "book_catalog".into());
            eprintln!("{:#}", e);
            eprintln!("{}", usage(&program));
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage layer:
    let store: SharedStore = if config.in_memory {
        tracing::info!("Using in-memory catalog");
        Arc::new(MemoryStore::new())
    } else {
        let file_store = JsonFileStore::new(&config.data_path);
        file_store.initialize().await?;
        tracing::info!("Using catalog file {}", file_store.path().display());
        Arc::new(file_store)
    };

    // 2. HTTP Router:
    let app = build_router(store);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}
