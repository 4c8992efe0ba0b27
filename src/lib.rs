//! # Tweetprobe Library
//!
//! Posts a test tweet to Twitter/X and optionally deletes it again, using
//! OAuth 1.0a User Context credentials for the v2 endpoints.
//!
//! ## Features
//!
//! - Credential loading from a `.env` file or the process environment
//! - OAuth 1.0a (HMAC-SHA1) request signing
//! - Tweet creation and deletion via the Twitter API v2
//! - An interactive confirmation step with two interpretation modes
//! - Structured logging
//!
//! ## Configuration
//!
//! The following keys are read:
//! - `CONSUMER_KEY` / `CONSUMER_SECRET`: the application's API key pair
//! - `ACCESS_TOKEN` / `ACCESS_SECRET`: the posting account's access token pair
//!
//! ## API Endpoints Used
//!
//! - `POST /2/tweets`: Creates the test tweet
//! - `DELETE /2/tweets/:id`: Deletes it

pub mod app;
pub mod config;
pub mod error;
pub mod gate;
pub mod oauth;
pub mod twitter;

// Re-export commonly used types and functions
pub use app::{run, RunOptions, RunOutcome, DEFAULT_PREFIX};
pub use config::{mask_secret, TwitterConfig};
pub use error::{Result, TweetError};
pub use gate::{decide, Decision, GateMode, DEFAULT_DELETE_KEY};
pub use oauth::build_oauth1_header;
pub use twitter::{
    delete_tweet, draft_tweet_text, post_tweet, tweet_url, SignedClient, DEFAULT_API_BASE,
};
