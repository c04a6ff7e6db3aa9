//! Upload orchestration
//!
//! Drives the storage backend through the `ObjectStore` trait: single-file
//! upload with optional skip-if-exists, recursive directory upload, listing
//! with pagination, and single/batch deletion. Everything runs sequentially;
//! there is no parallelism and no retry layer.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::key::build_key;
use crate::options::{UploadOptions, UploadResult};
use crate::store::ObjectStore;

/// Service cap on keys per batch-delete request
const MAX_DELETE_BATCH: usize = 1000;

/// Fallback content type when nothing can be inferred from the extension
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Upload orchestrator over a storage backend
///
/// The backend handle is stateless and reused sequentially across calls;
/// no state is held between operations.
pub struct Uploader<S> {
    store: S,
}

impl<S: ObjectStore> Uploader<S> {
    /// Create an uploader over the given backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying backend
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Upload a single local file.
    ///
    /// The key defaults to the file's base name when not given. With
    /// `overwrite: false`, an existence probe (a one-key listing with the
    /// resolved key as prefix) runs first and a match skips the upload.
    ///
    /// The probe is fail-open: a probe error is logged and the upload
    /// proceeds as if the object did not exist, favoring availability of
    /// the upload path. The write itself is fail-closed — put errors
    /// propagate. Do not "fix" the probe by making its failures fatal;
    /// that would change observable behavior.
    pub async fn upload_file(
        &self,
        bucket: &str,
        path: &Path,
        key: Option<&str>,
        options: &UploadOptions,
    ) -> Result<UploadResult> {
        if !path.exists() {
            return Err(Error::NotFound(format!("File not found: {}", path.display())));
        }

        let key = match key {
            Some(k) => k.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        if !options.overwrite && self.object_exists(bucket, &key).await {
            if options.verbose {
                info!(key = %key, "skipping, object already exists");
            }
            return Ok(UploadResult {
                key,
                e_tag: None,
                uploaded: false,
            });
        }

        let content_type = options
            .content_type
            .clone()
            .or_else(|| {
                mime_guess::from_path(path)
                    .first()
                    .map(|m| m.essence_str().to_string())
            })
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let body = std::fs::read(path)?;

        let e_tag = self
            .store
            .put_object(bucket, &key, body, &content_type, &options.metadata)
            .await?;

        if options.verbose {
            info!(key = %key, "uploaded");
        }

        Ok(UploadResult {
            key,
            e_tag,
            uploaded: true,
        })
    }

    /// Upload every regular file under a directory, recursively.
    ///
    /// Keys are built from each file's path relative to `dir`, prefixed
    /// with `prefix`. Files upload sequentially in enumeration order.
    /// A per-file failure is logged and the file is omitted from the
    /// returned results; the batch itself never fails as a whole. Callers
    /// cannot distinguish a skipped file from a failed one by inspecting
    /// the result sequence alone.
    pub async fn upload_directory(
        &self,
        bucket: &str,
        dir: &Path,
        prefix: &str,
        options: &UploadOptions,
    ) -> Result<Vec<UploadResult>> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!(
                "Directory not found: {}",
                dir.display()
            )));
        }

        let files = collect_files(dir)?;
        let mut results = Vec::with_capacity(files.len());

        for (path, relative) in files {
            let key = build_key(prefix, &relative);
            match self.upload_file(bucket, &path, Some(&key), options).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "upload failed, continuing");
                }
            }
        }

        Ok(results)
    }

    /// List every object key under a prefix, following continuation tokens
    /// until the backend reports no further truncation.
    ///
    /// A failure on any page aborts and propagates; results from earlier
    /// pages are discarded.
    pub async fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let page = self
                .store
                .list_page(bucket, prefix, continuation_token.as_deref(), None)
                .await?;

            keys.extend(page.keys);

            if page.truncated {
                continuation_token = page.next_token;
            } else {
                break;
            }
        }

        Ok(keys)
    }

    /// Delete a single object
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.store.delete_object(bucket, key).await
    }

    /// Delete a batch of objects, returning the keys the service confirmed
    /// as deleted.
    ///
    /// An empty input returns immediately without any network call. Larger
    /// inputs are chunked into sub-batches of 1000 keys (the service cap)
    /// and the per-chunk confirmations are aggregated.
    pub async fn delete_objects(&self, bucket: &str, keys: &[String]) -> Result<Vec<String>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut deleted = Vec::with_capacity(keys.len());
        for chunk in keys.chunks(MAX_DELETE_BATCH) {
            deleted.extend(self.store.delete_objects(bucket, chunk).await?);
        }

        Ok(deleted)
    }

    /// Existence probe via a one-key listing with the key as prefix.
    /// Fail-open: probe errors are logged and treated as "does not exist".
    async fn object_exists(&self, bucket: &str, key: &str) -> bool {
        match self.store.list_page(bucket, key, None, Some(1)).await {
            Ok(page) => !page.keys.is_empty(),
            Err(e) => {
                warn!(key = %key, error = %e, "existence probe failed, proceeding with upload");
                false
            }
        }
    }
}

/// Recursively enumerate regular files under a directory, depth-first.
///
/// Returns each file's full path together with its path relative to `root`.
/// Directories themselves are not reported; symlinks get whatever behavior
/// the underlying filesystem calls provide.
pub fn collect_files(root: &Path) -> std::io::Result<Vec<(PathBuf, String)>> {
    fn walk(dir: &Path, base: &Path, out: &mut Vec<(PathBuf, String)>) -> std::io::Result<()> {
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                walk(&path, base, out)?;
            } else {
                let relative = path
                    .strip_prefix(base)
                    .unwrap_or(&path)
                    .to_string_lossy()
                    .to_string();
                out.push((path, relative));
            }
        }
        Ok(())
    }

    let mut files = Vec::new();
    walk(root, root, &mut files)?;
    Ok(files)
}
