//! Core Twitter API utilities.
//!
//! This module contains the OAuth 1.0a signed HTTP client every Twitter API
//! call goes through, and helpers for logging API responses safely.

use log::{debug, info};
use reqwest::{Client, Method, Response};
use serde_json::Value;

use crate::config::TwitterConfig;
use crate::error::Result;
use crate::oauth::{build_oauth1_header, current_timestamp, generate_nonce};

/// Base URL of the Twitter API v2.
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com/2";

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum number of characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        format!(
            "{}... [truncated, {} total bytes]",
            sanitized.chars().take(max_len).collect::<String>(),
            text.len()
        )
    } else {
        sanitized
    }
}

/// An HTTP client that signs every request with OAuth 1.0a User Context credentials.
///
/// Each request gets a fresh nonce and timestamp. Construction performs no I/O
/// and cannot fail; bad credentials only surface as API rejections.
pub struct SignedClient {
    client: Client,
    credentials: TwitterConfig,
    api_base: String,
}

impl SignedClient {
    /// Creates a client bound to `credentials` that addresses `api_base`
    /// (for example [`DEFAULT_API_BASE`]).
    pub fn new(credentials: TwitterConfig, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        debug!("Signed client created for API base {}", api_base);
        Self {
            client: Client::new(),
            credentials,
            api_base,
        }
    }

    /// The API base URL, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn authorization(&self, method: &Method, url: &str) -> Result<String> {
        debug!("Building OAuth 1.0a authorization header for {} {}", method, url);
        let header = build_oauth1_header(
            method.as_str(),
            url,
            &[],
            &self.credentials,
            &generate_nonce(),
            current_timestamp(),
        )?;
        Ok(header)
    }

    /// Sends a signed POST with a JSON body.
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: Any HTTP response, whatever its status
    /// - `Err(TweetError::Transport)`: If the API could not be reached
    pub async fn post_json(&self, url: &str, payload: &Value) -> Result<Response> {
        let auth_header = self.authorization(&Method::POST, url)?;

        info!("Sending POST request to {}", url);
        debug!("Request headers: Authorization: OAuth [REDACTED], Content-Type: application/json");

        let response = self
            .client
            .post(url)
            .header("Authorization", auth_header)
            .json(payload)
            .send()
            .await?;

        info!("Received response with status: {}", response.status());
        Ok(response)
    }

    /// Sends a signed DELETE without a body.
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: Any HTTP response, whatever its status
    /// - `Err(TweetError::Transport)`: If the API could not be reached
    pub async fn delete(&self, url: &str) -> Result<Response> {
        let auth_header = self.authorization(&Method::DELETE, url)?;

        info!("Sending DELETE request to {}", url);
        let response = self
            .client
            .delete(url)
            .header("Authorization", auth_header)
            .send()
            .await?;

        info!("Received response with status: {}", response.status());
        Ok(response)
    }
}
