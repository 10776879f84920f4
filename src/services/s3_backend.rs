//! AWS S3 implementation of the storage capabilities, built on `aws-sdk-s3`.
//!
//! Configuration (credentials, region, endpoint) is resolved by the
//! `aws-config` default chain. A single attempt is made per call; retries and
//! timeouts are whatever the SDK applies by default.

use crate::{
    models::listing::ListingEntry,
    services::storage_service::{
        ClientProvider, DeleteObjectApi, ListObjectsApi, PutObjectApi, StorageError, StorageResult,
    },
};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream, types::Object};
use bytes::Bytes;
use chrono::DateTime;
use tracing::debug;

/// Builds a fresh [`S3Storage`] from the environment on every call.
#[derive(Debug, Clone, Default)]
pub struct S3ClientProvider;

#[async_trait]
impl ClientProvider for S3ClientProvider {
    type Client = S3Storage;

    async fn connect(&self) -> StorageResult<S3Storage> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        let Some(region) = sdk_config.region() else {
            return Err(StorageError::Config(
                "no AWS region could be resolved from the environment".into(),
            ));
        };
        debug!(%region, "resolved S3 client configuration");

        Ok(S3Storage {
            client: Client::new(&sdk_config),
        })
    }
}

/// Thin wrapper over an SDK client.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
}

#[async_trait]
impl ListObjectsApi for S3Storage {
    async fn list_objects(&self, bucket: &str) -> StorageResult<Vec<ListingEntry>> {
        let resp = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| remote_error("ListObjectsV2", e))?;

        Ok(resp.contents().iter().map(listing_entry).collect())
    }
}

#[async_trait]
impl PutObjectApi for S3Storage {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> StorageResult<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| remote_error("PutObject", e))?;
        Ok(())
    }
}

#[async_trait]
impl DeleteObjectApi for S3Storage {
    async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| remote_error("DeleteObject", e))?;
        Ok(())
    }
}

fn remote_error<E: std::error::Error>(operation: &'static str, err: E) -> StorageError {
    StorageError::remote(operation, DisplayErrorContext(err).to_string())
}

fn listing_entry(obj: &Object) -> ListingEntry {
    ListingEntry {
        key: obj.key().unwrap_or_default().to_string(),
        last_modified: obj
            .last_modified()
            .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
        size: obj.size().unwrap_or_default(),
        storage_class: obj.storage_class().map(|c| c.as_str().to_string()),
    }
}
