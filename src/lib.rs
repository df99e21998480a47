//! Gemini Commit - Automatic Git Commit Message Generator
//!
//! This library provides functionality to generate git commit messages from
//! the working-tree diff using the Gemini API.
//!
//! # Modules
//!
//! - [`git`] - Diff acquisition from the working tree
//! - [`prompt`] - Prompt template and construction
//! - [`gemini`] - Gemini API integration for message generation
//! - [`output`] - Console and file output handling
//! - [`pipeline`] - The acquire, generate, output run sequence
//!
//! # Example
//!
//! ```no_run
//! use gemini_commit::gemini::{GeminiClient, credential_from_env};
//! use gemini_commit::git::GitCli;
//! use gemini_commit::output::desktop_dir;
//! use gemini_commit::pipeline::{self, RunFlags};
//!
//! # fn main() -> anyhow::Result<()> {
//! let api_key = credential_from_env()?;
//! let generator = GeminiClient::new(api_key);
//! let flags = RunFlags { save_diff: false, save_message: false };
//! pipeline::run(&GitCli, &generator, &flags, &desktop_dir())?;
//! # Ok(())
//! # }
//! ```

pub mod gemini;
pub mod git;
pub mod output;
pub mod pipeline;
pub mod prompt;
