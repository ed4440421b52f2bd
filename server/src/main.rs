//! Simple To-Do Server entry point

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_server::repository::open_db;
use todo_server::{router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_new(&config.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let conn = open_db(&config.database).context("failed to open database")?;
    let app = router(AppState::new(conn), &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("Simple To-Do app running on http://{}", config.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
