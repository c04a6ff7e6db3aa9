//! Listing operation (--list)

use s3up_core::Uploader;
use s3up_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

#[derive(Debug, Serialize)]
struct ListOutput {
    prefix: String,
    keys: Vec<String>,
    total: usize,
}

/// List every object key under a prefix
pub async fn execute(
    uploader: &Uploader<S3Client>,
    bucket: &str,
    prefix: &str,
    formatter: &Formatter,
) -> ExitCode {
    match uploader.list_objects(bucket, prefix).await {
        Ok(keys) => {
            if formatter.is_json() {
                let output = ListOutput {
                    prefix: prefix.to_string(),
                    total: keys.len(),
                    keys,
                };
                formatter.json(&output);
            } else if keys.is_empty() {
                formatter.println("No objects found.");
            } else {
                formatter.println(&format!("Found {} object(s):", keys.len()));
                for key in &keys {
                    formatter.println(&format!("- {key}"));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list objects: {e}"));
            ExitCode::Failure
        }
    }
}
