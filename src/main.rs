//! # Tweetprobe
//!
//! A command-line tool that posts a test tweet to Twitter/X using OAuth 1.0a
//! User Context credentials, waits for the operator, and optionally deletes
//! the tweet again.
//!
//! ## Credentials
//!
//! Read from a `.env` file (or the process environment):
//! - `CONSUMER_KEY`, `CONSUMER_SECRET`: API key pair of the application
//! - `ACCESS_TOKEN`, `ACCESS_SECRET`: Access token pair of the posting account

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::error;

use tweetprobe::{run, GateMode, RunOptions, DEFAULT_API_BASE, DEFAULT_DELETE_KEY, DEFAULT_PREFIX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GateKind {
    /// Delete the posted tweet when the answer matches --delete-key
    Keyword,
    /// Delete whichever tweet id the operator types
    TweetId,
}

#[derive(Debug, Parser)]
#[command(name = "tweetprobe", version, about = "Post a test tweet and optionally delete it")]
struct Cli {
    /// Credential file in KEY=VALUE format
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Read credentials from the process environment only
    #[arg(long, conflicts_with = "env_file")]
    no_env_file: bool,

    /// How the answer to the delete prompt is interpreted
    #[arg(long, value_enum, default_value_t = GateKind::Keyword)]
    gate: GateKind,

    /// Answer that confirms deletion in keyword mode
    #[arg(long, default_value = DEFAULT_DELETE_KEY)]
    delete_key: String,

    /// Text placed before the timestamp in the tweet
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Twitter API v2 base URL
    #[arg(long, default_value = DEFAULT_API_BASE, hide = true)]
    api_base: String,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        let gate = match cli.gate {
            GateKind::Keyword => GateMode::Keyword(cli.delete_key),
            GateKind::TweetId => GateMode::TweetId,
        };
        RunOptions {
            env_file: (!cli.no_env_file).then_some(cli.env_file),
            gate,
            prefix: cli.prefix,
            api_base: cli.api_base,
        }
    }
}

/// Main entry point for tweetprobe.
///
/// Initializes logging (controlled by `RUST_LOG`), parses the command line and
/// runs the post/confirm/delete flow on a single thread. Any failure is
/// reported on stderr and exits with status 1.
///
/// # Example Usage
///
/// ```bash
/// # Post, then press 'd' to delete
/// cargo run
///
/// # Type the id of the tweet to delete instead
/// cargo run -- --gate tweet-id
///
/// # Run with debug logging
/// RUST_LOG=debug cargo run
/// ```
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let options = RunOptions::from(Cli::parse());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&options, &mut stdin.lock(), &mut stdout.lock()).await {
        error!("tweetprobe failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
