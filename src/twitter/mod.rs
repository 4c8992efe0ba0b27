//! Twitter/X API integration module.
//!
//! This module contains the OAuth 1.0a signed client and the tweet
//! operations built on it.

mod api;
mod tweets;

// Re-export public API
pub use api::{SignedClient, DEFAULT_API_BASE};
pub use tweets::{delete_tweet, draft_tweet_text, post_tweet, tweet_url};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::sanitize_for_logging;
