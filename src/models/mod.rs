//! Request-scoped data models.
//!
//! Nothing here outlives a single request: listing entries are produced by the
//! storage adapter, rendered, and dropped.

pub mod listing;
