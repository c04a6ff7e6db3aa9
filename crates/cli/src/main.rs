//! s3up - S3 object uploader
//!
//! A command-line tool for uploading, listing, and deleting objects
//! in S3 buckets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod exit_code;
mod output;
mod prompt;

use commands::Cli;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
