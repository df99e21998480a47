//! Git operations for commit message generation
//!
//! This module acquires the uncommitted working-tree diff by shelling out to
//! the git CLI.

use anyhow::{Context, Result};
use std::process::Command;

/// Source of the working-tree diff.
///
/// The git-backed implementation is [`GitCli`]; tests substitute stubs so the
/// pipeline can run without a repository.
pub trait DiffSource {
    /// Return the current uncommitted diff as text.
    fn working_tree_diff(&self) -> Result<String>;
}

/// [`DiffSource`] backed by the `git` command-line tool.
pub struct GitCli;

impl DiffSource for GitCli {
    fn working_tree_diff(&self) -> Result<String> {
        get_git_diff()
    }
}

/// Get the git diff of the working tree
///
/// Executes `git diff` with no path restriction and captures stdout.
///
/// The output is returned exactly as captured: no trimming or normalization,
/// so a later file write reproduces the diff byte for byte.
///
/// # Returns
///
/// * `Result<String>` - Output of git diff
///
/// # Errors
///
/// * Git command fails to execute or exits non-zero
/// * Output is not valid UTF-8
///
/// # Example
///
/// ```no_run
/// use gemini_commit::git::get_git_diff;
///
/// # fn main() -> anyhow::Result<()> {
/// let diff = get_git_diff()?;
/// println!("Uncommitted changes:\n{}", diff);
/// # Ok(())
/// # }
/// ```
pub fn get_git_diff() -> Result<String> {
    let output = Command::new("git")
        .arg("diff")
        .output()
        .context("Failed to execute git command. Make sure git is installed and in PATH")?;

    if !output.status.success() {
        anyhow::bail!(
            "Git diff command failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).context("Git diff output is not valid UTF-8")
}

// Note: No tests for this module as get_git_diff depends on the external git
// command and repository state. The pipeline tests cover the DiffSource seam
// with stubs instead.
