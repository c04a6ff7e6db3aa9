//! Delete operations (--delete and --delete-all)
//!
//! Both operations confirm before deleting unless --yes is given.
//! Prefix deletion lists the matching keys first so the user sees exactly
//! what is about to go away.

use s3up_core::Uploader;
use s3up_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::Formatter;
use crate::prompt::confirm;

#[derive(Debug, Serialize)]
struct DeleteOutput {
    status: &'static str,
    key: String,
}

#[derive(Debug, Serialize)]
struct DeleteAllOutput {
    status: &'static str,
    prefix: String,
    deleted: usize,
}

/// Delete a single object by key
pub async fn delete_single(
    uploader: &Uploader<S3Client>,
    bucket: &str,
    key: &str,
    yes: bool,
    formatter: &Formatter,
) -> ExitCode {
    if !yes && !confirm("Are you sure you want to delete this object? (y/n): ") {
        formatter.println("Operation cancelled.");
        return ExitCode::Success;
    }

    match uploader.delete_object(bucket, key).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&DeleteOutput {
                    status: "success",
                    key: key.to_string(),
                });
            } else {
                formatter.success("Object deleted successfully.");
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to delete {key}: {e}"));
            ExitCode::Failure
        }
    }
}

/// Delete every object under a prefix
pub async fn delete_all(
    uploader: &Uploader<S3Client>,
    bucket: &str,
    prefix: &str,
    yes: bool,
    formatter: &Formatter,
) -> ExitCode {
    let keys = match uploader.list_objects(bucket, prefix).await {
        Ok(keys) => keys,
        Err(e) => {
            formatter.error(&format!("Failed to list objects: {e}"));
            return ExitCode::Failure;
        }
    };

    if keys.is_empty() {
        if formatter.is_json() {
            formatter.json(&DeleteAllOutput {
                status: "success",
                prefix: prefix.to_string(),
                deleted: 0,
            });
        } else {
            formatter.println("No objects found to delete.");
        }
        return ExitCode::Success;
    }

    if !formatter.is_json() {
        formatter.println(&format!("Found {} object(s) to delete:", keys.len()));
        for key in &keys {
            formatter.println(&format!("- {key}"));
        }
    }

    if !yes {
        let question = format!(
            "Are you sure you want to delete these {} object(s)? (y/n): ",
            keys.len()
        );
        if !confirm(&question) {
            formatter.println("Operation cancelled.");
            return ExitCode::Success;
        }
    }

    match uploader.delete_objects(bucket, &keys).await {
        Ok(deleted) => {
            if formatter.is_json() {
                formatter.json(&DeleteAllOutput {
                    status: "success",
                    prefix: prefix.to_string(),
                    deleted: deleted.len(),
                });
            } else {
                formatter.success(&format!("Successfully deleted {} object(s).", deleted.len()));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to delete objects under {prefix}: {e}"));
            ExitCode::Failure
        }
    }
}
