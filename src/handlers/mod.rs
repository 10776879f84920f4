//! HTTP handlers. Each request resolves its own storage client, issues exactly
//! one storage operation against the configured bucket, and renders the result.

pub mod bucket_handlers;
pub mod console_handlers;
pub mod health_handlers;
pub mod origin;

use crate::{
    errors::AppError,
    services::storage_service::ClientProvider,
    state::AppState,
};
use tracing::error;

/// Build a fresh client for this request.
async fn connect<P: ClientProvider>(state: &AppState<P>) -> Result<P::Client, AppError> {
    state.provider.connect().await.map_err(|err| {
        error!(bucket = %state.bucket, error = %err, "could not configure storage client");
        AppError::from(err)
    })
}
