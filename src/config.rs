//! Configuration module for the tweetprobe tool.
//!
//! This module contains the credential structure and the `.env` file handling
//! for the Twitter/X API integration.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::error::{Result, TweetError};

/// Environment key holding the OAuth 1.0a consumer (API) key.
pub const CONSUMER_KEY: &str = "CONSUMER_KEY";
/// Environment key holding the OAuth 1.0a consumer (API) secret.
pub const CONSUMER_SECRET: &str = "CONSUMER_SECRET";
/// Environment key holding the user access token.
pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
/// Environment key holding the user access token secret.
pub const ACCESS_SECRET: &str = "ACCESS_SECRET";

/// Configuration struct for Twitter/X API credentials.
///
/// This struct holds the four pre-issued OAuth 1.0a User Context credentials.
/// It is built once at startup and handed by reference to the signed client;
/// the values are never validated locally, so bad credentials only show up as
/// a rejection from the API.
#[derive(Clone, PartialEq, Eq)]
pub struct TwitterConfig {
    /// Identifies the calling application
    pub consumer_key: String,
    /// Signs requests on behalf of the calling application
    pub consumer_secret: String,
    /// Identifies the authorized user account
    pub access_token: String,
    /// Signs requests on behalf of the authorized user account
    pub access_secret: String,
}

impl std::fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("consumer_key", &mask_secret(&self.consumer_key))
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &mask_secret(&self.access_token))
            .field("access_secret", &"[REDACTED]")
            .finish()
    }
}

impl TwitterConfig {
    /// Loads the credentials from a `.env` style key-value file.
    ///
    /// Values already present in the process environment take precedence over
    /// the file, matching the usual dotenv behaviour. Keys absent from both
    /// resolve to the empty string.
    ///
    /// # Parameters
    ///
    /// - `path`: Location of the env file
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If the file could be read and parsed
    /// - `Err(TweetError::ConfigLoad)`: If the file is missing, unreadable, or malformed
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tweetprobe::TwitterConfig;
    ///
    /// let config = TwitterConfig::from_env_file(".env").unwrap();
    /// ```
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let file_values = read_env_file(path.as_ref())?;
        Ok(Self::from_lookup(&file_values, |key| env::var(key).ok()))
    }

    /// Loads the credentials from the process environment only.
    pub fn from_env() -> Self {
        info!("Loading Twitter credentials from environment variables");
        Self::from_lookup(&HashMap::new(), |key| env::var(key).ok())
    }

    /// Resolves each key from `env_lookup` first, then from `file_values`.
    pub(crate) fn from_lookup(
        file_values: &HashMap<String, String>,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self::resolve(|key| env_lookup(key).or_else(|| file_values.get(key).cloned()))
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| match lookup(key) {
            Some(value) => {
                if value.is_empty() {
                    warn!("{} is empty, API requests will likely be rejected", key);
                } else {
                    info!("Found {} with length: {}", key, value.len());
                }
                value
            }
            None => {
                warn!("No {} found, API requests will likely be rejected", key);
                String::new()
            }
        };

        let config = TwitterConfig {
            consumer_key: read(CONSUMER_KEY),
            consumer_secret: read(CONSUMER_SECRET),
            access_token: read(ACCESS_TOKEN),
            access_secret: read(ACCESS_SECRET),
        };
        debug!("Twitter credentials loaded: {:?}", config);
        config
    }
}

/// Parses a `.env` style file into a key-value map without touching the
/// process environment.
pub(crate) fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    info!("Loading Twitter credentials from {}", path.display());

    let config_error = |source| TweetError::ConfigLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut file_values = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(config_error)? {
        let (key, value) = item.map_err(config_error)?;
        file_values.insert(key, value);
    }
    debug!("Read {} entries from {}", file_values.len(), path.display());
    Ok(file_values)
}

/// Masks a secret for logging, keeping at most a short prefix and suffix.
///
/// Values of eight characters or fewer are fully hidden.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    match chars.len() {
        0..=8 => "***".to_string(),
        9..=16 => format!("{}...", chars[..4].iter().collect::<String>()),
        n => format!(
            "{}...{}",
            chars[..8].iter().collect::<String>(),
            chars[n - 4..].iter().collect::<String>()
        ),
    }
}
