//! Wait options and synchronization primitives.
//!
//! Every wait in the suite has an explicit timeout and polling interval
//! sourced from configuration, never a per-call-site magic number. The
//! [`Waiter`] implements predicate polling for logic that can be exercised
//! without a browser.

use crate::result::{CartwrightError, CartwrightResult};
use std::time::{Duration, Instant};

/// Default timeout for element waits (5 seconds)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 5_000;

/// Default timeout for navigation waits (30 seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Quiet window after which the network is considered idle (500ms)
pub const NETWORK_IDLE_THRESHOLD_MS: u64 = 500;

/// Page load states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadState {
    /// Wait for the `load` event to fire
    #[default]
    Load,
    /// Wait for the `DOMContentLoaded` event
    DomContentLoaded,
    /// Wait for the network to be quiet for [`NETWORK_IDLE_THRESHOLD_MS`]
    NetworkIdle,
}

impl LoadState {
    /// The browser event name for this load state
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::DomContentLoaded => "DOMContentLoaded",
            Self::NetworkIdle => "networkidle",
        }
    }

    /// `document.readyState` value that satisfies this state
    #[must_use]
    pub const fn ready_state(&self) -> &'static str {
        match self {
            Self::Load | Self::NetworkIdle => "complete",
            Self::DomContentLoaded => "interactive",
        }
    }

    /// Default timeout for this load state
    #[must_use]
    pub const fn default_timeout_ms(&self) -> u64 {
        match self {
            Self::Load | Self::DomContentLoaded => DEFAULT_NAVIGATION_TIMEOUT_MS,
            // Network idle can take longer on the live storefront
            Self::NetworkIdle => 60_000,
        }
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_name())
    }
}

/// Options for wait operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
    /// Load state to wait for after navigation
    pub wait_until: LoadState,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            wait_until: LoadState::Load,
        }
    }
}

impl WaitOptions {
    /// Create wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Set load state to wait for
    #[must_use]
    pub const fn with_wait_until(mut self, state: LoadState) -> Self {
        self.wait_until = state;
        self
    }

    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Poll interval as a [`Duration`]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Synchronous predicate poller.
///
/// Used for wait logic that does not need a live page; the async element
/// waits in [`crate::browser::Page`] follow the same deadline/poll shape.
#[derive(Debug, Clone, Default)]
pub struct Waiter {
    options: WaitOptions,
}

impl Waiter {
    /// Create a waiter with default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a waiter with custom options
    #[must_use]
    pub fn with_options(options: WaitOptions) -> Self {
        Self { options }
    }

    /// Poll `predicate` until it returns true or the timeout elapses
    pub fn wait_for<F>(&self, predicate: F, waiting_for: &str) -> CartwrightResult<Duration>
    where
        F: Fn() -> bool,
    {
        let start = Instant::now();
        while start.elapsed() < self.options.timeout() {
            if predicate() {
                return Ok(start.elapsed());
            }
            std::thread::sleep(self.options.poll_interval());
        }
        Err(CartwrightError::timeout(
            self.options.timeout_ms,
            waiting_for,
        ))
    }
}
