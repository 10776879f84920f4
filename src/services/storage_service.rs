//! src/services/storage_service.rs
//!
//! Narrow storage capabilities used by the request handlers. Each remote
//! operation (list, put, delete) is its own single-method trait so handlers and
//! test doubles only depend on what they actually call. The concrete AWS
//! implementation lives in `s3_backend`.

use crate::models::listing::ListingEntry;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },
}

impl StorageError {
    /// Wrap a failure returned by the remote service for `operation`.
    pub fn remote(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            message: message.into(),
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Lists the objects of a bucket (first page only).
#[async_trait]
pub trait ListObjectsApi: Send + Sync {
    async fn list_objects(&self, bucket: &str) -> StorageResult<Vec<ListingEntry>>;
}

/// Uploads a whole object body under a key.
#[async_trait]
pub trait PutObjectApi: Send + Sync {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> StorageResult<()>;
}

/// Removes an object by key.
#[async_trait]
pub trait DeleteObjectApi: Send + Sync {
    async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()>;
}

/// Resolves remote configuration and hands out a ready client.
///
/// Handlers call [`ClientProvider::connect`] once per request, so every
/// request resolves its own configuration and nothing is shared between them.
#[async_trait]
pub trait ClientProvider: Send + Sync + 'static {
    type Client: ListObjectsApi + PutObjectApi + DeleteObjectApi;

    async fn connect(&self) -> StorageResult<Self::Client>;
}

/// List `bucket` through anything that can list.
pub async fn get_objects<A>(api: &A, bucket: &str) -> StorageResult<Vec<ListingEntry>>
where
    A: ListObjectsApi + ?Sized,
{
    api.list_objects(bucket).await
}

/// Upload `body` to `bucket/key` through anything that can put.
pub async fn put_file<A>(api: &A, bucket: &str, key: &str, body: Bytes) -> StorageResult<()>
where
    A: PutObjectApi + ?Sized,
{
    api.put_object(bucket, key, body).await
}

/// Delete `bucket/key` through anything that can delete.
pub async fn delete_item<A>(api: &A, bucket: &str, key: &str) -> StorageResult<()>
where
    A: DeleteObjectApi + ?Sized,
{
    api.delete_object(bucket, key).await
}
