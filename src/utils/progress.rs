//! Progress reporting for long-running scans
//!
//! Standardized progress bars for passes over the raw extracts, using the
//! indicatif crate.

use indicatif::{ProgressBar, ProgressStyle};

/// Default style for a scan progress bar
pub const DEFAULT_SCAN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({per_sec}) {msg}";

/// Create a scan progress bar with the standardized style
///
/// # Arguments
/// * `length` - Total number of rows to scan
/// * `description` - Message displayed next to the bar
///
/// # Returns
/// A configured `ProgressBar`
#[must_use]
pub fn create_scan_progress_bar(length: u64, description: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(DEFAULT_SCAN_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(description.to_string());
    pb
}
