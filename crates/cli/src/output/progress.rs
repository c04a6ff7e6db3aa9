//! Progress spinner for directory uploads
//!
//! Suppressed in quiet, JSON, and --no-progress modes.

use super::OutputConfig;

/// Spinner wrapper for indeterminate progress
#[derive(Debug)]
pub struct Spinner {
    bar: Option<indicatif::ProgressBar>,
}

impl Spinner {
    /// Create a spinner with the given message
    pub fn new(config: &OutputConfig, message: &str) -> Self {
        let bar = if config.quiet || config.json || config.no_progress {
            None
        } else {
            let bar = indicatif::ProgressBar::new_spinner();
            bar.set_style(
                indicatif::ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("valid template"),
            );
            bar.set_message(message.to_string());
            bar.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(bar)
        };

        Self { bar }
    }

    /// Stop the spinner and clear it from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_suppressed_in_quiet_mode() {
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        let spinner = Spinner::new(&config, "working");
        assert!(spinner.bar.is_none());
    }

    #[test]
    fn test_spinner_suppressed_in_json_mode() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        let spinner = Spinner::new(&config, "working");
        assert!(spinner.bar.is_none());
    }
}
