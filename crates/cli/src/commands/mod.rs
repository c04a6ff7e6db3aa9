//! CLI flag surface and command dispatch
//!
//! The tool is flag-driven rather than subcommand-driven: exactly one
//! operation flag (--file, --dir, --list, --delete, --delete-all) is chosen
//! per invocation, with --bucket always required.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use s3up_core::Uploader;
use s3up_s3::{ClientConfig, S3Client};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod delete;
mod list;
mod upload;

/// s3up - S3 object uploader
///
/// Upload files and directories to S3 buckets, list objects by prefix,
/// and delete single objects or whole prefixes.
#[derive(Parser, Debug)]
#[command(name = "s3up")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// S3 bucket name
    #[arg(long)]
    pub bucket: String,

    /// AWS region
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// AWS credential profile to use
    #[arg(long)]
    pub profile: Option<String>,

    /// Custom endpoint URL for S3-compatible backends
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to a file to upload
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Path to a directory to upload recursively
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Key prefix (folder path in the bucket)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Explicit object key for a single-file upload (defaults to the file name)
    #[arg(long)]
    pub key: Option<String>,

    /// Skip files that already exist in the bucket
    #[arg(long)]
    pub no_overwrite: bool,

    /// Content type override for uploads (inferred from extension by default)
    #[arg(long)]
    pub content_type: Option<String>,

    /// Object metadata as key=value (repeatable)
    #[arg(long, value_name = "KEY=VALUE")]
    pub metadata: Vec<String>,

    /// List objects with the given prefix (empty prefix lists everything)
    #[arg(long, value_name = "PREFIX", num_args = 0..=1, default_missing_value = "")]
    pub list: Option<String>,

    /// Delete a single object
    #[arg(long, value_name = "KEY")]
    pub delete: Option<String>,

    /// Delete all objects with the given prefix (use with caution)
    #[arg(long, value_name = "PREFIX")]
    pub delete_all: Option<String>,

    /// Answer yes to all confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Log per-file progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// The single operation selected by the CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    UploadFile(PathBuf),
    UploadDir(PathBuf),
    List(String),
    Delete(String),
    DeleteAll(String),
}

impl Cli {
    /// Resolve the operation flags into exactly one operation
    pub fn operation(&self) -> Result<Operation, String> {
        let mut operations = Vec::new();

        if let Some(path) = &self.file {
            operations.push(Operation::UploadFile(path.clone()));
        }
        if let Some(path) = &self.dir {
            operations.push(Operation::UploadDir(path.clone()));
        }
        if let Some(prefix) = &self.list {
            operations.push(Operation::List(prefix.clone()));
        }
        if let Some(key) = &self.delete {
            operations.push(Operation::Delete(key.clone()));
        }
        if let Some(prefix) = &self.delete_all {
            operations.push(Operation::DeleteAll(prefix.clone()));
        }

        if operations.len() > 1 {
            return Err(
                "Only one of --file, --dir, --list, --delete, or --delete-all may be given"
                    .to_string(),
            );
        }

        operations.into_iter().next().ok_or_else(|| {
            "You must specify an operation (--file, --dir, --list, --delete, or --delete-all)"
                .to_string()
        })
    }
}

/// Parse repeated key=value metadata flags into a map
pub fn parse_metadata(items: &[String]) -> Result<HashMap<String, String>, String> {
    let mut metadata = HashMap::new();
    for item in items {
        match item.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                metadata.insert(key.to_string(), value.to_string());
            }
            _ => return Err(format!("Invalid metadata '{item}'. Expected key=value")),
        }
    }
    Ok(metadata)
}

/// Execute the CLI and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        no_progress: cli.no_progress,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output_config.clone());

    let operation = match cli.operation() {
        Ok(op) => op,
        Err(e) => {
            formatter.error(&format!("Error: {e}"));
            return ExitCode::Failure;
        }
    };

    let metadata = match parse_metadata(&cli.metadata) {
        Ok(m) => m,
        Err(e) => {
            formatter.error(&format!("Error: {e}"));
            return ExitCode::Failure;
        }
    };

    let client_config = ClientConfig {
        region: cli.region.clone(),
        profile: cli.profile.clone(),
        endpoint: cli.endpoint.clone(),
    };

    let client = match S3Client::new(client_config).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return ExitCode::Failure;
        }
    };

    let uploader = Uploader::new(client);

    let options = s3up_core::UploadOptions {
        overwrite: !cli.no_overwrite,
        content_type: cli.content_type.clone(),
        metadata,
        verbose: cli.verbose,
    };

    match operation {
        Operation::UploadFile(path) => {
            upload::upload_file(&uploader, &cli, &path, &options, &formatter).await
        }
        Operation::UploadDir(path) => {
            upload::upload_directory(&uploader, &cli, &path, &options, &output_config, &formatter)
                .await
        }
        Operation::List(prefix) => list::execute(&uploader, &cli.bucket, &prefix, &formatter).await,
        Operation::Delete(key) => {
            delete::delete_single(&uploader, &cli.bucket, &key, cli.yes, &formatter).await
        }
        Operation::DeleteAll(prefix) => {
            delete::delete_all(&uploader, &cli.bucket, &prefix, cli.yes, &formatter).await
        }
    }
}
