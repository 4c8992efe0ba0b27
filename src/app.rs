//! The post → confirm → delete flow of a single tweetprobe run.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::info;

use crate::config::TwitterConfig;
use crate::error::Result;
use crate::gate::{self, Decision, GateMode};
use crate::twitter::{delete_tweet, draft_tweet_text, post_tweet, SignedClient, DEFAULT_API_BASE};

/// Default prefix of the test tweet text.
pub const DEFAULT_PREFIX: &str = "Tweeting Test";

/// Everything a run needs besides the console.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Credential file; `None` reads the process environment only
    pub env_file: Option<PathBuf>,
    /// How the operator's answer is interpreted
    pub gate: GateMode,
    /// Text placed before the timestamp in the tweet
    pub prefix: String,
    /// Twitter API v2 base URL
    pub api_base: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(".env")),
            gate: GateMode::default(),
            prefix: DEFAULT_PREFIX.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Id of the tweet that was posted
    pub posted_id: String,
    /// Id of the tweet that was deleted, if the operator asked for it
    pub deleted_id: Option<String>,
}

/// Runs the whole flow: load credentials, post, ask, and optionally delete.
///
/// Credentials are loaded before anything touches the network, so a missing
/// env file fails without a single request being sent. The first error ends
/// the run.
///
/// # Parameters
///
/// - `options`: Credential source, gate mode, tweet prefix and API base
/// - `input`: Where the operator's answer is read from (stdin in the binary)
/// - `output`: Where status lines and the prompt are written (stdout in the binary)
pub async fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    input: &mut R,
    output: &mut W,
) -> Result<RunOutcome> {
    let config = match &options.env_file {
        Some(path) => TwitterConfig::from_env_file(path)?,
        None => TwitterConfig::from_env(),
    };

    let client = SignedClient::new(config, options.api_base.as_str());

    let text = draft_tweet_text(&options.prefix, chrono::Utc::now());
    let posted_id = post_tweet(&client, &text).await?;
    writeln!(output, "Posted tweet with ID: {}", posted_id)?;

    let deleted_id = match gate::ask(input, output, &options.gate, &posted_id)? {
        Decision::Delete(id) => {
            delete_tweet(&client, &id).await?;
            writeln!(output, "Deleted tweet with ID: {}", id)?;
            Some(id)
        }
        Decision::Skip => {
            writeln!(output, "Exiting without deleting the tweet.")?;
            None
        }
    };

    info!("Run finished: posted {}, deleted {:?}", posted_id, deleted_id);
    Ok(RunOutcome {
        posted_id,
        deleted_id,
    })
}
