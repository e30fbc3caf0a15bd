//! Result and error types for cartwright.

use thiserror::Error;

/// Result type for cartwright operations
pub type CartwrightResult<T> = Result<T, CartwrightError>;

/// Errors that can occur while driving the storefront
#[derive(Debug, Error)]
pub enum CartwrightError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CARTWRIGHT_CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// A wait elapsed without the condition being met
    #[error("Timed out after {ms}ms waiting for {waiting_for}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of what was awaited
        waiting_for: String,
    },

    /// JavaScript evaluation error
    #[error("JavaScript evaluation failed: {message}")]
    Eval {
        /// Error message
        message: String,
    },

    /// Input dispatch error
    #[error("Input dispatch failed: {message}")]
    Input {
        /// Error message
        message: String,
    },

    /// Element lookup failed
    #[error("No element matched selector {selector:?}")]
    ElementNotFound {
        /// The selector that matched nothing
        selector: String,
    },

    /// Product tile lookup by name failed
    #[error("No product tile matched {name:?}")]
    ProductNotFound {
        /// The product name that matched no tile
        name: String,
    },

    /// Ordinal product selection out of range
    #[error("Requested product position {position} but only {available} products are listed")]
    PositionOutOfRange {
        /// Requested 1-based position
        position: usize,
        /// Number of tiles currently listed
        available: usize,
    },

    /// Screenshot error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CartwrightError {
    /// Construct a timeout error
    #[must_use]
    pub fn timeout(ms: u64, waiting_for: impl Into<String>) -> Self {
        Self::Timeout {
            ms,
            waiting_for: waiting_for.into(),
        }
    }

    /// Construct an assertion error
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }

    /// Whether this error is a wait timeout
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display_names_the_condition() {
        let err = CartwrightError::timeout(5000, "cookie consent button");
        let text = err.to_string();
        assert!(text.contains("5000ms"));
        assert!(text.contains("cookie consent button"));
    }

    #[test]
    fn test_position_out_of_range_display() {
        let err = CartwrightError::PositionOutOfRange {
            position: 9,
            available: 3,
        };
        assert!(err.to_string().contains("position 9"));
        assert!(err.to_string().contains("only 3"));
    }

    #[test]
    fn test_is_timeout() {
        assert!(CartwrightError::timeout(1, "x").is_timeout());
        assert!(!CartwrightError::assertion("x").is_timeout());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CartwrightError = io.into();
        assert!(matches!(err, CartwrightError::Io(_)));
    }
}
