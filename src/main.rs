use anyhow::Result;
use axum::Router;
use bucket_browser::{
    routes::routes::browser_routes, server, services::s3_backend::S3ClientProvider,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    server::init_tracing();

    // --- Parse config; no bucket means usage and a clean exit ---
    let Some(cfg) = server::config_or_usage()? else {
        return Ok(());
    };

    tracing::info!("Starting bucket-browser with config: {:?}", cfg);

    // --- Build router ---
    let state = AppState::new(cfg.bucket.clone(), S3ClientProvider);
    let app: Router = browser_routes().with_state(state);

    // --- Start server ---
    server::serve(&cfg, app).await
}
