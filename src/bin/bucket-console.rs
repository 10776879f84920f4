use anyhow::Result;
use axum::Router;
use bucket_browser::{
    routes::routes::console_routes, server, services::s3_backend::S3ClientProvider,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing();

    let Some(cfg) = server::config_or_usage()? else {
        return Ok(());
    };

    tracing::info!("Starting bucket-console with config: {:?}", cfg);

    let state = AppState::new(cfg.bucket.clone(), S3ClientProvider);
    let app: Router = console_routes().with_state(state);

    server::serve(&cfg, app).await
}
