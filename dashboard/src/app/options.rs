//! Application configuration options

use std::env;
use std::time::Duration;

use crate::http::client::DEFAULT_BASE_URL;
use crate::logs::LogOptions;
use crate::workers::refresher;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Backend API base URL
    pub backend_base_url: String,

    /// Render once and exit instead of polling
    pub run_once: bool,

    /// Refresher worker options
    pub refresher: refresher::Options,

    /// Logging options
    pub logs: LogOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            backend_base_url: DEFAULT_BASE_URL.to_string(),
            run_once: false,
            refresher: refresher::Options::default(),
            logs: LogOptions::default(),
        }
    }
}

impl AppOptions {
    /// Build options from environment variables, falling back to defaults.
    /// Recognized: KOVERT_API_URL, KOVERT_LOG_LEVEL, KOVERT_POLL_SECS.
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if let Ok(url) = env::var("KOVERT_API_URL") {
            if !url.is_empty() {
                options.backend_base_url = url;
            }
        }
        if let Ok(level) = env::var("KOVERT_LOG_LEVEL") {
            if let Ok(level) = level.parse() {
                options.logs.log_level = level;
            }
        }
        if let Ok(secs) = env::var("KOVERT_POLL_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                options.refresher.interval = Duration::from_secs(secs);
            }
        }

        options
    }
}
