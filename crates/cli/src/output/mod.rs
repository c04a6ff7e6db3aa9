//! Output formatting utilities
//!
//! Formatters for CLI output in human-readable and JSON formats, plus a
//! spinner for long-running directory uploads.

mod formatter;
mod progress;

pub use formatter::Formatter;
pub use progress::Spinner;

/// Output configuration derived from CLI flags
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Use JSON output format
    pub json: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Disable the progress spinner
    pub no_progress: bool,
    /// Suppress non-error output
    pub quiet: bool,
}
