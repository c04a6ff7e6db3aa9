//! Upload operations (--file and --dir)
//!
//! Thin glue over the core uploader: resolves the destination key, asks
//! for confirmation when an overwrite is possible, and formats results.

use std::path::Path;

use s3up_core::{collect_files, UploadOptions, UploadResult, Uploader};
use s3up_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig, Spinner};
use crate::prompt::confirm;

use super::Cli;

#[derive(Debug, Serialize)]
struct FileUploadOutput {
    status: &'static str,
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    e_tag: Option<String>,
    uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_human: Option<String>,
}

#[derive(Debug, Serialize)]
struct DirUploadOutput {
    status: &'static str,
    uploaded: usize,
    skipped: usize,
    results: Vec<UploadResult>,
}

/// Upload a single file
pub async fn upload_file(
    uploader: &Uploader<S3Client>,
    cli: &Cli,
    path: &Path,
    options: &UploadOptions,
    formatter: &Formatter,
) -> ExitCode {
    if !path.exists() {
        formatter.error(&format!("File not found: {}", path.display()));
        return ExitCode::Failure;
    }

    // Explicit --key wins; otherwise --prefix is joined with the file name,
    // and with neither the core defaults to the bare file name
    let key = match (&cli.key, &cli.prefix) {
        (Some(key), _) => Some(key.clone()),
        (None, Some(prefix)) => {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            Some(format!("{prefix}/{name}"))
        }
        (None, None) => None,
    };

    if options.overwrite
        && !cli.yes
        && !confirm("This may overwrite an existing object. Continue? (y/n): ")
    {
        formatter.println("Operation cancelled.");
        return ExitCode::Success;
    }

    let size_bytes = std::fs::metadata(path).map(|m| m.len()).ok();

    match uploader
        .upload_file(&cli.bucket, path, key.as_deref(), options)
        .await
    {
        Ok(result) => {
            if formatter.is_json() {
                let output = FileUploadOutput {
                    status: "success",
                    key: result.key,
                    e_tag: result.e_tag,
                    uploaded: result.uploaded,
                    size_bytes,
                    size_human: size_bytes.map(|s| humansize::format_size(s, humansize::BINARY)),
                };
                formatter.json(&output);
            } else if result.uploaded {
                let size = size_bytes
                    .map(|s| humansize::format_size(s, humansize::BINARY))
                    .unwrap_or_default();
                formatter.success(&format!("Uploaded: {} ({size})", result.key));
            } else {
                formatter.println(&format!("Skipped (already exists): {}", result.key));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to upload {}: {e}", path.display()));
            ExitCode::Failure
        }
    }
}

/// Upload a directory recursively
pub async fn upload_directory(
    uploader: &Uploader<S3Client>,
    cli: &Cli,
    path: &Path,
    options: &UploadOptions,
    output_config: &OutputConfig,
    formatter: &Formatter,
) -> ExitCode {
    if !path.is_dir() {
        formatter.error(&format!("Directory not found: {}", path.display()));
        return ExitCode::Failure;
    }

    // Walk once up front for the count shown in the prompt; the uploader
    // enumerates again when it runs
    let files = match collect_files(path) {
        Ok(f) => f,
        Err(e) => {
            formatter.error(&format!("Failed to read directory: {e}"));
            return ExitCode::Failure;
        }
    };

    if !formatter.is_json() {
        let destination = cli
            .prefix
            .as_deref()
            .map(|p| format!("{p}/"))
            .unwrap_or_else(|| "the bucket root".to_string());
        formatter.println(&format!(
            "Uploading {} file(s) from {} to {destination} in bucket {}...",
            files.len(),
            path.display(),
            cli.bucket
        ));
    }

    if !files.is_empty() && !cli.yes {
        let warning = if options.overwrite {
            " (may overwrite existing objects)"
        } else {
            ""
        };
        let question = format!(
            "Continue with uploading {} file(s){warning}? (y/n): ",
            files.len()
        );
        if !confirm(&question) {
            formatter.println("Operation cancelled.");
            return ExitCode::Success;
        }
    }

    let spinner = Spinner::new(output_config, &format!("Uploading {} file(s)...", files.len()));

    let result = uploader
        .upload_directory(
            &cli.bucket,
            path,
            cli.prefix.as_deref().unwrap_or(""),
            options,
        )
        .await;

    spinner.finish();

    match result {
        Ok(results) => {
            let uploaded = results.iter().filter(|r| r.uploaded).count();
            let skipped = results.len() - uploaded;

            if formatter.is_json() {
                let output = DirUploadOutput {
                    status: "success",
                    uploaded,
                    skipped,
                    results,
                };
                formatter.json(&output);
            } else {
                formatter.success(&format!(
                    "Upload complete: {uploaded} file(s) uploaded, {skipped} file(s) skipped"
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to upload {}: {e}", path.display()));
            ExitCode::Failure
        }
    }
}
