use std::env;

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "data/Vocab.csv".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10000
}

fn default_suggest_limit() -> usize {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Path or URL of the vocabulary file
    #[serde(default = "default_source")]
    pub source: String,
    /// Timeout for remote fetches
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,
    /// Cap on live-typing suggestions
    #[serde(default = "default_suggest_limit")]
    pub suggest_limit: usize,
}

impl Config {
    pub fn new() -> Self {
        let source = env::var("WORDBANK_SOURCE").unwrap_or_else(|_| default_source());

        let http_timeout_ms = env::var("WORDBANK_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_http_timeout_ms);

        let suggest_limit = env::var("WORDBANK_SUGGEST_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_suggest_limit);

        Config {
            source,
            http_timeout_ms,
            suggest_limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            http_timeout_ms: default_http_timeout_ms(),
            suggest_limit: default_suggest_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_source_layout() {
        let config = Config::default();
        assert_eq!(config.source, "data/Vocab.csv");
        assert_eq!(config.http_timeout_ms, 10000);
        assert_eq!(config.suggest_limit, 10);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.source, "data/Vocab.csv");
        assert_eq!(config.suggest_limit, 10);
    }
}
