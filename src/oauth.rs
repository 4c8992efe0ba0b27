//! OAuth authentication module for Twitter/X API integration.
//!
//! This module implements OAuth 1.0a User Context request signing with the
//! HMAC-SHA1 signature method, which is what pre-issued consumer and access
//! token pairs from the Twitter Developer Portal authenticate with.

use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::Url;

use crate::config::TwitterConfig;

type HmacSha1 = Hmac<Sha1>;

const NONCE_LENGTH: usize = 32;

/// Percent-encodes a value per RFC 3986, leaving only unreserved characters.
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Generates a random alphanumeric nonce for a single request.
pub fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Current Unix time in seconds, as sent in `oauth_timestamp`.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Splits a request URL into the base string URI (scheme, host, non-default
/// port and path) and its decoded query parameters.
fn split_url(url: &str) -> Result<(String, Vec<(String, String)>), url::ParseError> {
    let parsed = Url::parse(url)?;
    let mut base = format!(
        "{}://{}",
        parsed.scheme(),
        parsed.host_str().unwrap_or_default().to_lowercase()
    );
    if let Some(port) = parsed.port() {
        base.push_str(&format!(":{}", port));
    }
    base.push_str(parsed.path());

    let query = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    Ok((base, query))
}

/// Computes the HMAC-SHA1 signature for a request.
///
/// # Parameters
///
/// - `method`: HTTP method, upper-cased before signing
/// - `base_url`: Request URL without query string
/// - `params`: Every oauth, query and form parameter, unencoded
/// - `consumer_secret`, `access_secret`: The two signing secrets
///
/// # Returns
///
/// The base64-encoded signature.
fn sign(
    method: &str,
    base_url: &str,
    params: &[(String, String)],
    consumer_secret: &str,
    access_secret: &str,
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(base_url),
        encode(&param_string)
    );

    let signing_key = format!("{}&{}", encode(consumer_secret), encode(access_secret));

    let mut mac =
        HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC can take any size");
    mac.update(base_string.as_bytes());

    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

/// Builds the Authorization header for OAuth 1.0a User Context authentication.
///
/// Query-string parameters of `url` and any `extra_params` (form-encoded body
/// fields) are included in the signature. JSON bodies are not signed, which
/// is what the Twitter API v2 expects.
///
/// # Parameters
///
/// - `method`: The HTTP method of the request
/// - `url`: The full request URL
/// - `extra_params`: Form body parameters, empty for JSON and bodiless requests
/// - `credentials`: The consumer and access token pairs
/// - `nonce`: A per-request unique value
/// - `timestamp`: Unix seconds
///
/// # Returns
///
/// - `Ok(String)`: The header value, `OAuth key="value", ...`
/// - `Err(url::ParseError)`: If `url` is not an absolute URL
///
/// # Example
///
/// ```rust
/// use tweetprobe::{build_oauth1_header, TwitterConfig};
///
/// let credentials = TwitterConfig {
///     consumer_key: "key".into(),
///     consumer_secret: "secret".into(),
///     access_token: "token".into(),
///     access_secret: "token_secret".into(),
/// };
/// let header = build_oauth1_header(
///     "DELETE",
///     "https://api.twitter.com/2/tweets/42",
///     &[],
///     &credentials,
///     "nonce",
///     1_700_000_000,
/// )
/// .unwrap();
/// assert!(header.starts_with("OAuth oauth_consumer_key=\"key\""));
/// ```
pub fn build_oauth1_header(
    method: &str,
    url: &str,
    extra_params: &[(String, String)],
    credentials: &TwitterConfig,
    nonce: &str,
    timestamp: i64,
) -> Result<String, url::ParseError> {
    let (base_url, query_params) = split_url(url)?;

    let mut oauth_params: Vec<(String, String)> = vec![
        ("oauth_consumer_key".into(), credentials.consumer_key.clone()),
        ("oauth_nonce".into(), nonce.to_string()),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), timestamp.to_string()),
        ("oauth_token".into(), credentials.access_token.clone()),
        ("oauth_version".into(), "1.0".into()),
    ];

    let all_params: Vec<(String, String)> = oauth_params
        .iter()
        .chain(query_params.iter())
        .chain(extra_params.iter())
        .cloned()
        .collect();

    let signature = sign(
        method,
        &base_url,
        &all_params,
        &credentials.consumer_secret,
        &credentials.access_secret,
    );
    oauth_params.push(("oauth_signature".into(), signature));
    oauth_params.sort();

    let header_parts: Vec<String> = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect();

    Ok(format!("OAuth {}", header_parts.join(", ")))
}
