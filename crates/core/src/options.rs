//! Upload options and results
//!
//! Both types are plain value objects: constructed per call, immutable
//! after return, nothing persisted between calls.

use std::collections::HashMap;

use serde::Serialize;

/// Options controlling upload behavior
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Overwrite objects that already exist (default true). When false,
    /// an existence probe runs before each upload and matches are skipped.
    pub overwrite: bool,

    /// Explicit content type; inferred from the file extension when absent
    pub content_type: Option<String>,

    /// User metadata attached to each stored object
    pub metadata: HashMap<String, String>,

    /// Report per-file progress to the caller
    pub verbose: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            content_type: None,
            metadata: HashMap::new(),
            verbose: false,
        }
    }
}

/// Outcome of one attempted file upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    /// The resolved storage object key
    pub key: String,

    /// Integrity token returned by the service on write; absent when the
    /// upload was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<String>,

    /// True if the object was written, false if skipped because it exists
    pub uploaded: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = UploadOptions::default();
        assert!(options.overwrite);
        assert!(options.content_type.is_none());
        assert!(options.metadata.is_empty());
        assert!(!options.verbose);
    }

    #[test]
    fn test_skipped_result_has_no_etag() {
        let result = UploadResult {
            key: "a.txt".into(),
            e_tag: None,
            uploaded: false,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("e_tag"));
        assert!(json.contains("\"uploaded\":false"));
    }
}
