//! Represents one object returned by a bucket listing.

use chrono::{DateTime, Utc};

/// Key of the demo object written by the add route and removed by the delete route.
pub const FIXED_OBJECT_KEY: &str = "Hello-World";

/// Payload uploaded under [`FIXED_OBJECT_KEY`].
pub const FIXED_OBJECT_BODY: &str = "Hello World";

/// A single entry from a bucket listing.
///
/// Entries live only for the duration of one request; nothing is cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Object key within the bucket.
    pub key: String,

    /// Timestamp when the object was last modified, if the service reported one.
    pub last_modified: Option<DateTime<Utc>>,

    /// Size in bytes.
    pub size: i64,

    /// Storage class (e.g., STANDARD, GLACIER), opaque to this service.
    pub storage_class: Option<String>,
}

#[cfg(test)]
impl ListingEntry {
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            last_modified: None,
            size,
            storage_class: None,
        }
    }

    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn with_storage_class(mut self, class: impl Into<String>) -> Self {
        self.storage_class = Some(class.into());
        self
    }
}
