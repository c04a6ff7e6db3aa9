//! ObjectStore trait definition
//!
//! This trait defines the four storage operations the uploader needs.
//! It allows the orchestrator to be decoupled from the specific S3 SDK
//! implementation and mocked for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// One page of a listing response
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPage {
    /// Object keys on this page
    pub keys: Vec<String>,

    /// Whether more results are available
    pub truncated: bool,

    /// Opaque cursor for fetching the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Trait for the storage operations backing the uploader
///
/// Implemented by the S3 adapter and by test doubles.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write an object, returning the service's ETag when it provides one
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        metadata: &HashMap<String, String>,
    ) -> Result<Option<String>>;

    /// Fetch one page of keys under a prefix
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<&str>,
        max_keys: Option<i32>,
    ) -> Result<ListPage>;

    /// Delete a single object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;

    /// Delete a batch of objects, returning the keys the service confirmed
    /// as deleted (service response order, not input order)
    async fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<Vec<String>>;
}
