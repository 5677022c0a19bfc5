//! Mining CMS server.
//!
//! Run from repo root: `cargo run -p mining-cms-server`

use mining_cms::{
    app, ensure_database_exists, ensure_schema, AppState, ServerConfig, DEFAULT_LOG_FILTER,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if config.auto_migrate {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    if config.auto_migrate {
        ensure_schema(&pool).await?;
    }

    let router = app(AppState::new(pool), &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Mining CMS listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
