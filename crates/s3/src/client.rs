//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s3up-core.

use std::collections::HashMap;

use async_trait::async_trait;

use s3up_core::{Error, ListPage, ObjectStore, Result};

/// Connection configuration for the S3 client
///
/// The credential profile is an explicit field handed to the SDK config
/// loader rather than a process-wide environment variable, so constructing
/// a client has no side effects on the rest of the process.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// AWS region
    pub region: String,

    /// Named credential profile, resolved by the SDK's provider chain
    pub profile: Option<String>,

    /// Custom endpoint URL for S3-compatible backends
    pub endpoint: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            endpoint: None,
        }
    }
}

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from an explicit configuration
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        // Path-style addressing for custom endpoints, which S3-compatible
        // backends generally require
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        metadata: &HashMap<String, String>,
    ) -> Result<Option<String>> {
        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(aws_sdk_s3::primitives::ByteStream::from(body))
            .content_type(content_type);

        if !metadata.is_empty() {
            request = request.set_metadata(Some(metadata.clone()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(response
            .e_tag()
            .map(|etag| etag.trim_matches('"').to_string()))
    }

    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation_token: Option<&str>,
        max_keys: Option<i32>,
    ) -> Result<ListPage> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if !prefix.is_empty() {
            request = request.prefix(prefix);
        }

        if let Some(token) = continuation_token {
            request = request.continuation_token(token);
        }

        if let Some(max) = max_keys {
            request = request.max_keys(max);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let keys = response
            .contents()
            .iter()
            .filter_map(|object| object.key().map(|k| k.to_string()))
            .collect();

        Ok(ListPage {
            keys,
            truncated: response.is_truncated().unwrap_or(false),
            next_token: response.next_continuation_token().map(|t| t.to_string()),
        })
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(())
    }

    async fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<Vec<String>> {
        use aws_sdk_s3::types::{Delete, ObjectIdentifier};

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let objects = keys
            .iter()
            .map(|key| {
                ObjectIdentifier::builder()
                    .key(key)
                    .build()
                    .map_err(|e| Error::Transport(e.to_string()))
            })
            .collect::<Result<Vec<ObjectIdentifier>>>()?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .quiet(false)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let response = self
            .inner
            .delete_objects()
            .bucket(bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let deleted: Vec<String> = response
            .deleted()
            .iter()
            .filter_map(|d| d.key().map(|k| k.to_string()))
            .collect();

        if !response.errors().is_empty() {
            let error_keys: Vec<&str> = response
                .errors()
                .iter()
                .filter_map(|e| e.key())
                .collect();
            tracing::warn!("Failed to delete some objects: {:?}", error_keys);
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.profile.is_none());
        assert!(config.endpoint.is_none());
    }
}
