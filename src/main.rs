//! CLI tool to generate git commit messages using the Gemini API
//!
//! This tool captures the uncommitted working-tree diff and uses Gemini to
//! generate a commit message, optionally saving the diff and the message to
//! timestamped files on the desktop.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gemini_commit::gemini::{GeminiClient, credential_from_env};
use gemini_commit::git::GitCli;
use gemini_commit::output::desktop_dir;
use gemini_commit::pipeline::{self, RunFlags};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "gemini_commit")]
#[command(about = "Generate git commit messages from the working-tree diff using Gemini", long_about = None)]
#[command(version)]
struct Args {
    /// Save the git diff to a file on the desktop
    #[arg(long)]
    diff: bool,

    /// Save the commit message to a file on the desktop
    #[arg(long)]
    msg: bool,
}

/// Main entry point
///
/// # Process flow
///
/// 1. Initialize logging
/// 2. Parse command-line arguments
/// 3. Read the API credential from the environment (fatal if absent)
/// 4. Get the working-tree diff
/// 5. Generate a commit message with Gemini and print it
/// 6. Persist the diff and/or the message when requested
fn main() {
    init_logging();

    let args = Args::parse();
    info!("Starting git diff generation process");

    // The credential gate runs before anything else touches git or the
    // network.
    let api_key = match credential_from_env() {
        Ok(key) => key,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let generator = GeminiClient::new(api_key);
    let flags = RunFlags {
        save_diff: args.diff,
        save_message: args.msg,
    };

    if let Err(e) = pipeline::run(&GitCli, &generator, &flags, &desktop_dir()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Set up the process-wide logging subscriber
///
/// Timestamped, severity-colored lines on stderr; the level defaults to
/// `info` and can be overridden through `RUST_LOG`.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
