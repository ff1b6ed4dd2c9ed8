//! Catalog server: seeds every collection and serves the API.
//!
//! Run from repo root: `cargo run -p catalog-server`
//! Settings come from `CATALOG_*` environment variables; a `.env` file is honored.

use catalog_api::{app, load_from_env, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("catalog_api=info,catalog_server=info,tower_http=info")
            }),
        )
        .init();

    let config = load_from_env()?;
    tracing::info!(
        product_list_delay_ms = config.product_list_delay.as_millis() as u64,
        strict_validation = config.strict_validation,
        seeded = config.seed.is_some(),
        "configuration loaded"
    );
    let state = AppState::new(&config);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    tracing::info!("API docs at http://{}/api-docs/", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
