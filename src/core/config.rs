//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::fmt;

/// Default generative-language API base URL
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used by the chat demo
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Server configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// API key for the text-generation service
    /// Read from `GEMINI_API_KEY`, falling back to `API_KEY`
    pub api_key: Option<String>,

    /// Model identifier, e.g. `gemini-2.5-flash`
    pub model: String,

    /// API base URL without a trailing slash
    pub api_base: String,

    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.is_empty());

        let model = lookup("GEMINI_MODEL")
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = lookup("GEMINI_API_BASE")
            .filter(|b| !b.is_empty())
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let temperature = lookup("GEMINI_TEMPERATURE")
            .and_then(|t| t.parse::<f32>().ok())
            .filter(|t| t.is_finite())
            .map(|t| t.clamp(0.0, 2.0))
            .unwrap_or(DEFAULT_TEMPERATURE);

        Self {
            api_key,
            model,
            api_base,
            temperature,
        }
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` endpoint for the configured model
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
