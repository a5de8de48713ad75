//! vitals server binary.
//!
//! Accepts metric updates over HTTP, stores them in-memory, and serves
//! them back (single value as plain text, full listing as HTML).

use tracing_subscriber::{fmt, EnvFilter};

use vitals_server::{app_state::AppState, config::Config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load();
    fmt()
        .with_env_filter(
            EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let listen = cfg.listen_addr();
    let state = AppState::new();
    let app = router::build_router(state);

    tracing::info!(%listen, "vitals-server starting");
    let listener = tokio::net::TcpListener::bind(&listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
