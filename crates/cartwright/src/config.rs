//! Suite configuration.
//!
//! The storefront base URL, wait timeouts, and retry policy live here as a
//! single injected value instead of being repeated per test file. All values
//! can be overridden from the environment for CI runs.

use crate::wait::WaitOptions;
use std::time::Duration;

/// Default storefront under test
pub const DEFAULT_BASE_URL: &str = "https://automationexercise.com";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "CARTWRIGHT_BASE_URL";

/// Environment variable overriding headless mode (`0`/`false` run headed)
pub const ENV_HEADLESS: &str = "CARTWRIGHT_HEADLESS";

/// Environment variable pointing at a chromium binary
pub const ENV_CHROMIUM_PATH: &str = "CARTWRIGHT_CHROMIUM_PATH";

/// How many times a wait is attempted before the timeout surfaces.
///
/// The default is a single attempt, matching the suite's historical
/// single-shot behavior; raise `attempts` to tolerate a flaky banner or
/// modal without editing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of attempts (minimum 1)
    pub attempts: u32,
    /// Pause between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no backoff
    #[must_use]
    pub fn single() -> Self {
        Self::default()
    }

    /// Create a policy with the given attempt count
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set the pause between attempts
    #[must_use]
    pub const fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Attempt count, never below one
    #[must_use]
    pub fn effective_attempts(&self) -> u32 {
        self.attempts.max(1)
    }
}

/// Configuration for a suite run
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the storefront under test
    pub base_url: String,
    /// Default wait options for element and navigation waits
    pub wait: WaitOptions,
    /// Retry policy applied to waits
    pub retry: RetryPolicy,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Run the browser headless
    pub headless: bool,
    /// Tolerate certificate errors (the demo site occasionally misconfigures TLS)
    pub ignore_https_errors: bool,
    /// Path to a chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wait: WaitOptions::default(),
            retry: RetryPolicy::default(),
            viewport_width: 1920,
            viewport_height: 1080,
            headless: true,
            ignore_https_errors: true,
            chromium_path: None,
        }
    }
}

impl SiteConfig {
    /// Create a config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with defaults, then apply environment overrides
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(headless) = std::env::var(ENV_HEADLESS) {
            config.headless = !matches!(headless.as_str(), "0" | "false" | "no");
        }
        if let Ok(path) = std::env::var(ENV_CHROMIUM_PATH) {
            if !path.is_empty() {
                config.chromium_path = Some(path);
            }
        }
        config
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set default wait options
    #[must_use]
    pub fn with_wait(mut self, wait: WaitOptions) -> Self {
        self.wait = wait;
        self
    }

    /// Set the retry policy
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Build an absolute URL from a relative path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            return base.to_string();
        }
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod url_for_tests {
        use super::*;

        #[test]
        fn test_joins_relative_path() {
            let config = SiteConfig::default();
            assert_eq!(
                config.url_for("/login"),
                "https://automationexercise.com/login"
            );
        }

        #[test]
        fn test_empty_path_is_base() {
            let config = SiteConfig::default();
            assert_eq!(config.url_for(""), "https://automationexercise.com");
        }

        #[test]
        fn test_missing_slash_is_inserted() {
            let config = SiteConfig::new().with_base_url("https://staging.example.com/");
            assert_eq!(
                config.url_for("view_cart"),
                "https://staging.example.com/view_cart"
            );
        }
    }

    mod retry_tests {
        use super::*;

        #[test]
        fn test_default_is_single_shot() {
            assert_eq!(RetryPolicy::default().attempts, 1);
        }

        #[test]
        fn test_zero_attempts_clamps_to_one() {
            let policy = RetryPolicy::single().with_attempts(0);
            assert_eq!(policy.effective_attempts(), 1);
        }

        #[test]
        fn test_builders() {
            let policy = RetryPolicy::single()
                .with_attempts(3)
                .with_backoff(Duration::from_millis(250));
            assert_eq!(policy.effective_attempts(), 3);
            assert_eq!(policy.backoff, Duration::from_millis(250));
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = SiteConfig::default();
            assert_eq!(config.base_url, DEFAULT_BASE_URL);
            assert!(config.headless);
            assert!(config.ignore_https_errors);
            assert_eq!(config.viewport_width, 1920);
            assert_eq!(config.viewport_height, 1080);
        }

        #[test]
        fn test_builder_chain() {
            let config = SiteConfig::new()
                .with_base_url("http://localhost:8080")
                .with_viewport(1280, 720)
                .with_headless(false);
            assert_eq!(config.base_url, "http://localhost:8080");
            assert_eq!(config.viewport_width, 1280);
            assert!(!config.headless);
        }
    }
}
