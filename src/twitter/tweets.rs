//! Tweet operations for Twitter API.
//!
//! This module contains functions for posting and deleting tweets
//! using the Twitter API v2.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, error, info, warn};
use reqwest::Response;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::error::{Result, TweetError};

use super::api::{sanitize_for_logging, SignedClient};

#[derive(Debug, Deserialize)]
struct CreatedTweet {
    id: String,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Formats the text of a test tweet: the prefix followed by `now` in RFC 3339.
///
/// The timestamp keeps consecutive runs from being rejected as duplicates.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tweetprobe::draft_tweet_text;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// assert_eq!(
///     draft_tweet_text("Tweeting Test", now),
///     "Tweeting Test 2024-03-01T12:00:00Z!"
/// );
/// ```
pub fn draft_tweet_text(prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{} {}!",
        prefix,
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Builds the URL addressing a single tweet.
///
/// The identifier is appended as one path segment, so characters such as
/// `/`, `?` or `#` are percent-encoded instead of changing the endpoint.
/// Numeric ids come out unchanged.
///
/// # Example
///
/// ```rust
/// use tweetprobe::tweet_url;
///
/// assert_eq!(
///     tweet_url("https://api.twitter.com/2", "42").unwrap(),
///     "https://api.twitter.com/2/tweets/42"
/// );
/// ```
pub fn tweet_url(api_base: &str, tweet_id: &str) -> Result<String> {
    let mut url = Url::parse(api_base)?;
    url.path_segments_mut()
        .map_err(|_| TweetError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .push("tweets")
        .push(tweet_id);
    Ok(url.into())
}

/// Reads a response body for error reporting.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD, so the result is
/// byte-for-byte verbatim only for UTF-8 bodies.
async fn read_body(response: Response) -> Result<String> {
    let bytes = response.bytes().await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Posts a tweet to Twitter/X using the API v2 endpoint.
///
/// # Parameters
///
/// - `client`: The OAuth 1.0a signed client
/// - `text`: The text content of the tweet; length limits are left to the API
///
/// # Returns
///
/// - `Ok(String)`: The id of the created tweet
/// - `Err(TweetError::Transport)`: If the API could not be reached
/// - `Err(TweetError::ServerRejection)`: If the status is not 200 or 201; carries the body verbatim (lossily decoded if it is not UTF-8)
/// - `Err(TweetError::Decode)`: If the body has no `data.id` string
///
/// # Example
///
/// ```rust,no_run
/// use tweetprobe::{post_tweet, SignedClient, TwitterConfig, DEFAULT_API_BASE};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = TwitterConfig::from_env();
///     let client = SignedClient::new(config, DEFAULT_API_BASE);
///     match post_tweet(&client, "Hello from Rust!").await {
///         Ok(id) => println!("Tweet posted: {}", id),
///         Err(e) => eprintln!("Failed to post tweet: {}", e),
///     }
/// }
/// ```
pub async fn post_tweet(client: &SignedClient, text: &str) -> Result<String> {
    info!("Starting tweet post operation for text: '{}'", text);

    let url = format!("{}/tweets", client.api_base());
    let payload = json!({ "text": text });
    debug!("Tweet payload: {}", payload);

    let response = client.post_json(&url, &payload).await?;
    let status = response.status();
    let body = read_body(response).await?;

    if status.as_u16() != 200 && status.as_u16() != 201 {
        error!("Tweet post failed - Status: {}", status);
        debug!("Error response: {}", sanitize_for_logging(&body, 200));
        return Err(TweetError::ServerRejection {
            status: status.as_u16(),
            body,
        });
    }

    debug!("Response summary: {} bytes received", body.len());
    let created: CreateTweetResponse = serde_json::from_str(&body).map_err(|e| {
        error!("Tweet post response did not contain data.id: {}", e);
        e
    })?;

    info!("Tweet posted successfully with ID: {}", created.data.id);
    Ok(created.data.id)
}

/// Deletes a tweet by ID using the Twitter API v2 endpoint.
///
/// Statuses 200 and 204 count as success and the body is ignored. For any
/// other status the body is expected to be `{"error": "..."}` and its message
/// becomes the rejection body; when it cannot be decoded the raw body is
/// reported instead so the rejection itself is never hidden.
///
/// # Parameters
///
/// - `client`: The OAuth 1.0a signed client
/// - `tweet_id`: The id returned by [`post_tweet`]
///
/// # Returns
///
/// - `Ok(())`: If the tweet was deleted
/// - `Err(TweetError::Transport)`: If the API could not be reached
/// - `Err(TweetError::ServerRejection)`: For any other status
pub async fn delete_tweet(client: &SignedClient, tweet_id: &str) -> Result<()> {
    info!("Starting delete operation for tweet {}", tweet_id);

    let url = tweet_url(client.api_base(), tweet_id)?;
    let response = client.delete(&url).await?;
    let status = response.status();

    if status.as_u16() == 200 || status.as_u16() == 204 {
        info!("Tweet {} deleted successfully", tweet_id);
        return Ok(());
    }

    let body = read_body(response).await?;
    error!("Tweet delete failed - Status: {}", status);
    debug!("Error response: {}", sanitize_for_logging(&body, 200));

    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => parsed.error,
        Err(e) => {
            warn!("Delete error response was not in the expected format: {}", e);
            body
        }
    };

    Err(TweetError::ServerRejection {
        status: status.as_u16(),
        body: message,
    })
}
