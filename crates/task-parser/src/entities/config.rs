//! Configuration entities.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the completion-service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the completion model.
pub const MODEL_ENV: &str = "TASK_PARSER_MODEL";

/// Environment variable overriding the completion endpoint.
pub const BASE_URL_ENV: &str = "TASK_PARSER_BASE_URL";

/// Environment variable setting the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "TASK_PARSER_TIMEOUT_SECS";

/// Default chat-completions endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Settings for the optional completion-model path.
///
/// A parser built from a config without `api_key` never leaves the
/// heuristic pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Credential for the completion service
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "apiKey")]
    pub api_key: Option<String>,

    /// Model ID
    #[serde(default = "default_model")]
    pub model: String,

    /// Chat-completions endpoint
    #[serde(default = "default_base_url", rename = "baseURL")]
    pub base_url: String,

    /// Temperature (0.0 - 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens
    #[serde(default = "default_max_tokens", rename = "maxTokens")]
    pub max_tokens: u32,

    /// Caller-side timeout for the completion request
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "requestTimeoutSecs"
    )]
    pub request_timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_temperature() -> f32 {
    0.3
}

const fn default_max_tokens() -> u32 {
    1000
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: None,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from process environment.
    ///
    /// Blank variables count as unset. An unparseable timeout is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: get(API_KEY_ENV),
            model: get(MODEL_ENV).unwrap_or_else(default_model),
            base_url: get(BASE_URL_ENV).unwrap_or_else(default_base_url),
            request_timeout_secs: get(TIMEOUT_ENV).and_then(|v| v.parse().ok()),
            ..Self::default()
        }
    }

    /// Set the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom endpoint.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Whether a usable credential is present.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Request timeout as a duration, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
