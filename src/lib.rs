//! Minimal HTTP front ends for a single S3 bucket.
//!
//! Two servers share this library: an interactive browser that lists the
//! bucket and can add or delete a demo object, and a console server that
//! prints the listing as text.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod routes;
pub mod server;
pub mod services;
pub mod state;
