//! The acquire, generate, output run sequence
//!
//! A run has exactly one path: capture the working-tree diff, build the
//! prompt, ask the generator for a message, then print and optionally
//! persist. A failed generation ends the run quietly; a failed acquisition
//! aborts it.

use anyhow::Result;
use std::path::Path;

use crate::gemini::CommitMessageGenerator;
use crate::git::DiffSource;
use crate::output::{self, DIFF_PREFIX, MESSAGE_PREFIX};
use crate::prompt::build_prompt;

/// Persistence switches from the command line.
pub struct RunFlags {
    /// Save the captured diff to a file.
    pub save_diff: bool,
    /// Save the generated commit message to a file.
    pub save_message: bool,
}

/// Execute one full run
///
/// # Arguments
///
/// * `diff_source` - Supplier of the working-tree diff
/// * `generator` - Commit message generator
/// * `flags` - Which outputs to persist
/// * `out_dir` - Directory the output files are written into
///
/// # Errors
///
/// * Diff acquisition failed
///
/// Generation failure is not an error: the generator logs it and the run
/// completes without printing or writing anything. File write failures are
/// logged by the output layer and never propagate.
pub fn run(
    diff_source: &dyn DiffSource,
    generator: &dyn CommitMessageGenerator,
    flags: &RunFlags,
    out_dir: &Path,
) -> Result<()> {
    let diff = diff_source.working_tree_diff()?;
    let prompt = build_prompt(&diff);

    let Some(message) = generator.generate(&prompt) else {
        return Ok(());
    };

    output::print_message(&message);

    if flags.save_diff {
        let path = out_dir.join(output::timestamped_filename(DIFF_PREFIX));
        output::save_diff(&path, &diff);
    }

    if flags.save_message {
        let path = out_dir.join(output::timestamped_filename(MESSAGE_PREFIX));
        output::save_commit_message(&path, &message);
    }

    Ok(())
}
