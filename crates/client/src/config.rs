//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAYGRAPH_ENDPOINT` - HTTP GraphQL endpoint (e.g. `https://hasura.example.net/v1/graphql`)
//!
//! ## Optional
//! - `PAYGRAPH_WS_ENDPOINT` - WebSocket endpoint (default: the HTTP endpoint with a `ws`/`wss` scheme)
//! - `PAYGRAPH_ADMIN_SECRET` - Sent as `x-hasura-admin-secret` (high entropy, no placeholders)
//! - `PAYGRAPH_ROLE` - Sent as `x-hasura-role`
//! - `PAYGRAPH_BEARER_TOKEN` - Sent as `Authorization: Bearer <token>`
//! - `PAYGRAPH_TIMEOUT_SECS` - HTTP request timeout (default: 30)
//! - `PAYGRAPH_CACHE_TTL_SECS` - Read cache time-to-live (default: 60)
//! - `PAYGRAPH_CACHE_CAPACITY` - Read cache entry limit (default: 1000)

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CACHE_TTL_SECS: u64 = 60;
const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Connection settings for a Hasura endpoint.
///
/// Implements `Debug` manually to redact secret fields.
#[derive(Clone)]
pub struct ClientConfig {
    /// HTTP endpoint queries and mutations are posted to
    pub endpoint: Url,
    /// WebSocket endpoint for subscriptions
    pub ws_endpoint: Url,
    /// `x-hasura-admin-secret` header value
    pub admin_secret: Option<SecretString>,
    /// `x-hasura-role` header value
    pub role: Option<String>,
    /// Bearer token for the `Authorization` header
    pub bearer_token: Option<SecretString>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// How long a read result stays cached
    pub cache_ttl: Duration,
    /// Maximum number of cached read results
    pub cache_capacity: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |secret: &Option<SecretString>| secret.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("ws_endpoint", &self.ws_endpoint.as_str())
            .field("admin_secret", &redacted(&self.admin_secret))
            .field("role", &self.role)
            .field("bearer_token", &redacted(&self.bearer_token))
            .field("timeout", &self.timeout)
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl ClientConfig {
    /// Defaults for `endpoint`, with no credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `endpoint` is not an
    /// `http(s)` or `ws(s)` URL.
    pub fn new(endpoint: Url) -> Result<Self, ConfigError> {
        let ws_endpoint = websocket_url(&endpoint)
            .map_err(|e| ConfigError::InvalidEnvVar("PAYGRAPH_ENDPOINT".to_string(), e))?;
        Ok(Self {
            endpoint,
            ws_endpoint,
            admin_secret: None,
            role: None,
            bearer_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the admin secret fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let endpoint: Url = parse_var("PAYGRAPH_ENDPOINT", var("PAYGRAPH_ENDPOINT"))?
            .ok_or_else(|| ConfigError::MissingEnvVar("PAYGRAPH_ENDPOINT".to_string()))?;
        let mut config = Self::new(endpoint)?;

        if let Some(ws_endpoint) = parse_var("PAYGRAPH_WS_ENDPOINT", var("PAYGRAPH_WS_ENDPOINT"))? {
            config.ws_endpoint = ws_endpoint;
        }
        if let Some(secret) = var("PAYGRAPH_ADMIN_SECRET") {
            validate_secret_strength(&secret, "PAYGRAPH_ADMIN_SECRET")?;
            config.admin_secret = Some(SecretString::from(secret));
        }
        config.role = var("PAYGRAPH_ROLE");
        config.bearer_token = var("PAYGRAPH_BEARER_TOKEN").map(SecretString::from);

        if let Some(secs) = parse_var::<u64>("PAYGRAPH_TIMEOUT_SECS", var("PAYGRAPH_TIMEOUT_SECS"))? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) =
            parse_var::<u64>("PAYGRAPH_CACHE_TTL_SECS", var("PAYGRAPH_CACHE_TTL_SECS"))?
        {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) =
            parse_var("PAYGRAPH_CACHE_CAPACITY", var("PAYGRAPH_CACHE_CAPACITY"))?
        {
            config.cache_capacity = capacity;
        }

        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional environment variable.
fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// The WebSocket twin of an HTTP endpoint.
fn websocket_url(endpoint: &Url) -> Result<Url, String> {
    let scheme = match endpoint.scheme() {
        "http" => "ws",
        "https" => "wss",
        "ws" | "wss" => return Ok(endpoint.clone()),
        other => return Err(format!("unsupported scheme `{other}`")),
    };
    let mut ws = endpoint.clone();
    ws.set_scheme(scheme)
        .map_err(|()| format!("cannot use `{scheme}` for {endpoint}"))?;
    Ok(ws)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}
