//! Shared, read-only handler state.

use crate::services::storage_service::ClientProvider;
use std::sync::Arc;

/// The bucket every handler targets plus the provider that builds a client
/// for each request. Both are fixed at startup.
pub struct AppState<P> {
    pub bucket: Arc<str>,
    pub provider: Arc<P>,
}

impl<P: ClientProvider> AppState<P> {
    pub fn new(bucket: impl Into<Arc<str>>, provider: P) -> Self {
        Self {
            bucket: bucket.into(),
            provider: Arc::new(provider),
        }
    }
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            bucket: Arc::clone(&self.bucket),
            provider: Arc::clone(&self.provider),
        }
    }
}
