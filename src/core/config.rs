//! Service configuration with documented constants
//!
//! All tunable numbers live here with a note on what they control.
//! The config is built once at startup and handed to the client and router
//! explicitly; nothing reads it from global state.

use crate::core::error::{ChatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for the MLB client and the answer formatting
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    // === UPSTREAM ===
    /// Base URL of the MLB Stats API (no trailing slash)
    pub api_base_url: String,

    /// Per-request timeout for upstream calls (seconds)
    ///
    /// A call that exceeds this is treated as unavailable and the handler
    /// falls back to its default dataset.
    pub request_timeout_secs: u64,

    /// Upper bound on producing a whole answer (seconds)
    ///
    /// Handlers that chain several upstream calls can take a few multiples
    /// of `request_timeout_secs`; past this the router gives up and apologizes.
    pub answer_timeout_secs: u64,

    /// User agent sent with every upstream request
    pub user_agent: String,

    // === CACHE ===
    /// How long an upstream response stays fresh (seconds)
    pub cache_ttl_secs: u64,

    /// Maximum number of cached responses
    ///
    /// When full, expired entries are purged first, then the oldest entry.
    pub cache_max_entries: usize,

    // === ANSWERS ===
    /// Season used for "current" stats and leaderboards
    pub season: u16,

    /// How many leaders to request from the leaderboard endpoint
    pub leaderboard_fetch_limit: usize,

    /// How many season leaders to print (8-10)
    pub leaderboard_display_limit: usize,

    /// How many all-time leaders to print (8-10)
    pub all_time_display_limit: usize,

    /// How many games to list for probable pitchers (8-12)
    pub probable_display_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://statsapi.mlb.com/api/v1".into(),
            request_timeout_secs: 10,
            answer_timeout_secs: 25,
            user_agent: concat!("mlb-chat/", env!("CARGO_PKG_VERSION")).into(),

            // Matches the upstream's own refresh cadence closely enough
            cache_ttl_secs: 1800,
            cache_max_entries: 300,

            season: 2025,
            leaderboard_fetch_limit: 10,
            leaderboard_display_limit: 10,
            all_time_display_limit: 8,
            probable_display_limit: 12,
        }
    }
}

impl ChatConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from defaults, an optional TOML file, and the environment
    ///
    /// Optional: MLB_API_URL overrides `api_base_url`
    /// Optional: MLB_SEASON overrides `season`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                toml::from_str(&contents)?
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate().map_err(ChatError::Config)?;
        Ok(config)
    }

    /// Apply MLB_API_URL / MLB_SEASON from `lookup` (the process environment in `load`)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("MLB_API_URL") {
            self.api_base_url = url;
        }
        if let Some(season) = lookup("MLB_SEASON") {
            self.season = season
                .trim()
                .parse()
                .map_err(|_| ChatError::Config(format!("MLB_SEASON is not a year: {}", season)))?;
        }

        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("api_base_url must not be empty".into());
        }

        if self.request_timeout_secs == 0 || self.answer_timeout_secs == 0 {
            return Err("Timeouts must be positive".into());
        }

        if self.answer_timeout_secs < self.request_timeout_secs {
            return Err(format!(
                "answer_timeout_secs ({}) should be >= request_timeout_secs ({})",
                self.answer_timeout_secs, self.request_timeout_secs
            ));
        }

        if self.cache_max_entries == 0 {
            return Err("cache_max_entries must be positive".into());
        }

        for (name, value) in [
            ("leaderboard_display_limit", self.leaderboard_display_limit),
            ("all_time_display_limit", self.all_time_display_limit),
        ] {
            if !(8..=10).contains(&value) {
                return Err(format!("{} ({}) must be between 8 and 10", name, value));
            }
        }

        if !(8..=12).contains(&self.probable_display_limit) {
            return Err(format!(
                "probable_display_limit ({}) must be between 8 and 12",
                self.probable_display_limit
            ));
        }

        if self.leaderboard_fetch_limit < self.leaderboard_display_limit {
            return Err(format!(
                "leaderboard_fetch_limit ({}) should be >= leaderboard_display_limit ({})",
                self.leaderboard_fetch_limit, self.leaderboard_display_limit
            ));
        }

        Ok(())
    }
}
