//! Process startup shared by both binaries: logging, config, and the listener.

use crate::config::{AppConfig, missing_bucket_help};
use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Resolve the config, or print usage guidance and return `None`.
pub fn config_or_usage() -> Result<Option<AppConfig>> {
    let cfg = AppConfig::from_env_and_args()?;
    if cfg.is_none() {
        println!("{}", missing_bucket_help());
    }
    Ok(cfg)
}

/// Bind the configured address and serve `app` until the process exits.
///
/// A bind failure is returned to the caller, which exits non-zero.
pub async fn serve(cfg: &AppConfig, app: Router) -> Result<()> {
    let addr = cfg.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding listener on {}", addr))?;

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
