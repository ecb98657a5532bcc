//! Binary entrypoint for the greeter HTTP server.
//!
//! Reads configuration from environment variables, see
//! [`ServerConfig::from_env`]. Log filtering follows `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use greeter_server::config::ServerConfig;
use greeter_server::router::build_router;
use greeter_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("greeter_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;

    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!(
        db_path = %config.db_path,
        joke_api_url = %config.joke_api_url,
        "greeter server starting on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
