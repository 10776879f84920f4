//! Router tables for both servers.
//!
//! ## Interactive bucket browser
//! - `GET  /`, `GET /health` — liveness ("OK")
//! - `GET  /s3`              — HTML listing of the bucket
//! - `POST /s3/add`          — upload the demo object, 303 back to `/s3`
//! - `POST /s3/delete`       — delete the demo object, 303 back to `/s3`
//!
//! ## Console listing server
//! - `GET /`       — plain-text listing, also echoed to stdout
//! - `GET /health` — liveness ("OK")

use crate::{
    handlers::{
        bucket_handlers::{add_object, browse, delete_object},
        console_handlers::console_listing,
        health_handlers::health,
    },
    services::storage_service::ClientProvider,
    state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};

pub const LIST_PATH: &str = "/s3";
pub const ADD_PATH: &str = "/s3/add";
pub const DELETE_PATH: &str = "/s3/delete";

/// Build the interactive browser router. Built once at startup.
pub fn browser_routes<P: ClientProvider>() -> Router<AppState<P>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route(LIST_PATH, get(browse::<P>))
        .route(ADD_PATH, post(add_object::<P>))
        .route(DELETE_PATH, post(delete_object::<P>))
}

/// Build the console listing router.
pub fn console_routes<P: ClientProvider>() -> Router<AppState<P>> {
    Router::new()
        .route("/", get(console_listing::<P>))
        .route("/health", get(health))
}
