//! Console and file output handling
//!
//! This module prints the generated commit message to stdout and persists
//! the diff and the message to timestamped files on the user's desktop.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Filename prefix for persisted diffs.
pub const DIFF_PREFIX: &str = "diff";

/// Filename prefix for persisted commit messages.
pub const MESSAGE_PREFIX: &str = "commit_message";

/// Resolve the user's desktop directory.
///
/// Falls back to `<home>/Desktop` when the platform does not report a
/// desktop directory, and to the current directory as a last resort.
pub fn desktop_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Filename for the given prefix and the current local time
///
/// Produces `<prefix>_<HHMM>.txt`. Two calls within the same clock minute
/// produce the same name, so a rerun overwrites the earlier file.
///
/// # Example
///
/// ```
/// use gemini_commit::output::{DIFF_PREFIX, timestamped_filename};
///
/// let name = timestamped_filename(DIFF_PREFIX);
/// assert!(name.starts_with("diff_"));
/// assert!(name.ends_with(".txt"));
/// ```
pub fn timestamped_filename(prefix: &str) -> String {
    filename_for(prefix, Local::now())
}

fn filename_for(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.txt", prefix, now.format("%H%M"))
}

/// Print the generated commit message to stdout with its fixed label.
pub fn print_message(message: &str) {
    println!("\nGenerated Commit Message:\n{}", message);
}

/// Save the captured diff to the given path.
///
/// A failed write is logged and swallowed so the sibling write can still be
/// attempted.
pub fn save_diff(path: &Path, diff: &str) {
    match write_text(path, diff) {
        Ok(()) => info!("Git diff saved to: {}", path.display()),
        Err(e) => error!("Error saving git diff: {:#}", e),
    }
}

/// Save the generated commit message to the given path.
///
/// Same independent-write behavior as [`save_diff`].
pub fn save_commit_message(path: &Path, message: &str) {
    match write_text(path, message) {
        Ok(()) => info!("Commit message saved to: {}", path.display()),
        Err(e) => error!("Error saving commit message: {:#}", e),
    }
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
