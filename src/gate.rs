//! Interactive confirmation step between posting and deleting a tweet.
//!
//! The operator's single line of input is turned into a [`Decision`]. How the
//! line is interpreted is an explicit [`GateMode`]: either a confirmation
//! keyword deletes the tweet that was just posted, or the line itself names
//! the tweet to delete.

use std::io::{BufRead, Write};

use log::{debug, info};

/// Default keyword that confirms deletion in [`GateMode::Keyword`].
pub const DEFAULT_DELETE_KEY: &str = "d";

/// How the operator's answer is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateMode {
    /// Delete the posted tweet only when the answer equals the keyword.
    Keyword(String),
    /// Treat any non-empty answer as the id of the tweet to delete.
    TweetId,
}

impl Default for GateMode {
    fn default() -> Self {
        GateMode::Keyword(DEFAULT_DELETE_KEY.to_string())
    }
}

impl GateMode {
    /// The prompt printed before waiting for input.
    pub fn prompt(&self) -> String {
        match self {
            GateMode::Keyword(key) => format!(
                "Press '{}' to delete the tweet or any other key to exit:",
                key
            ),
            GateMode::TweetId => {
                "Enter the tweet ID to delete, or press Enter to exit:".to_string()
            }
        }
    }
}

/// Outcome of the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Delete the tweet with this id.
    Delete(String),
    /// Leave the tweet in place.
    Skip,
}

/// Interprets one line of operator input.
///
/// Surrounding whitespace, including the line terminator, is ignored.
pub fn decide(mode: &GateMode, answer: &str, posted_id: &str) -> Decision {
    let answer = answer.trim();
    match mode {
        GateMode::Keyword(key) if answer == key.as_str() => {
            Decision::Delete(posted_id.to_string())
        }
        GateMode::Keyword(_) => Decision::Skip,
        GateMode::TweetId if answer.is_empty() => Decision::Skip,
        GateMode::TweetId => Decision::Delete(answer.to_string()),
    }
}

/// Prints the prompt and blocks until the operator answers with one line.
///
/// End of input counts as an empty answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mode: &GateMode,
    posted_id: &str,
) -> std::io::Result<Decision> {
    writeln!(output, "{}", mode.prompt())?;
    output.flush()?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer)?;
    debug!("Read {} bytes of operator input", read);

    let decision = decide(mode, &answer, posted_id);
    info!("Gate decision: {:?}", decision);
    Ok(decision)
}
