//! s3up-core: Core library for the s3up S3 uploader
//!
//! This crate provides the core functionality for the s3up CLI, including:
//! - Object key construction from local paths
//! - Upload orchestration (single file, recursive directory)
//! - Listing with pagination and single/batch deletion
//! - ObjectStore trait abstracting the storage backend
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod error;
pub mod key;
pub mod options;
pub mod store;
pub mod uploader;

pub use error::{Error, Result};
pub use key::build_key;
pub use options::{UploadOptions, UploadResult};
pub use store::{ListPage, ObjectStore};
pub use uploader::{collect_files, Uploader};
