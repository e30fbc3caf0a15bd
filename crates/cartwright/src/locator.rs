//! Locator abstraction for element selection.
//!
//! Every selector the suite points at the storefront is built here, so the
//! reverse-engineered DOM contract (CSS classes, `data-qa` attributes) stays
//! behind one boundary: a markup change means editing the page object that
//! owns the selector, not every test.
//!
//! Selectors compile to JavaScript query expressions that are evaluated in
//! the page; the generated strings are unit-testable without a browser.

use crate::wait::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
use std::time::Duration;

/// Selector for locating elements on the storefront
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// CSS selector (first match)
    Css(String),
    /// Element whose text content contains the given string
    Text(String),
    /// CSS selector filtered by contained text
    CssWithText {
        /// Base CSS selector
        css: String,
        /// Text content to match
        text: String,
    },
    /// The storefront's `data-qa` attribute contract
    /// (e.g. `signup-name`, `create-account`, `pay-button`)
    DataQa(String),
    /// The nth match (0-based) of a CSS selector
    Nth {
        /// Base CSS selector
        css: String,
        /// 0-based index among matches
        index: usize,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a `data-qa` selector
    #[must_use]
    pub fn data_qa(value: impl Into<String>) -> Self {
        Self::DataQa(value.into())
    }

    /// Create an nth-match selector
    #[must_use]
    pub fn nth(css: impl Into<String>, index: usize) -> Self {
        Self::Nth {
            css: css.into(),
            index,
        }
    }

    /// Filter a CSS selector by contained text
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        match self {
            Self::Css(css) => Self::CssWithText {
                css,
                text: text.into(),
            },
            other => other,
        }
    }

    /// JavaScript expression resolving to the matched element (or null)
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::Text(t) => format!(
                "Array.from(document.querySelectorAll('*')).find(el => el.textContent.includes({t:?}))"
            ),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).find(el => el.textContent.includes({text:?}))"
            ),
            Self::DataQa(v) => format!("document.querySelector('[data-qa={v:?}]')"),
            Self::Nth { css, index } => {
                format!("document.querySelectorAll({css:?})[{index}]")
            }
        }
    }

    /// JavaScript expression counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::Text(t) => format!(
                "Array.from(document.querySelectorAll('*')).filter(el => el.textContent.includes({t:?})).length"
            ),
            Self::CssWithText { css, text } => format!(
                "Array.from(document.querySelectorAll({css:?})).filter(el => el.textContent.includes({text:?})).length"
            ),
            Self::DataQa(v) => format!("document.querySelectorAll('[data-qa={v:?}]').length"),
            Self::Nth { css, index } => format!(
                "(document.querySelectorAll({css:?}).length > {index} ? 1 : 0)"
            ),
        }
    }

    /// JavaScript expression resolving to true when the element is visible
    #[must_use]
    pub fn to_visible_query(&self) -> String {
        format!(
            "(() => {{ const el = {}; if (!el) return false; \
             const rect = el.getBoundingClientRect(); \
             const style = window.getComputedStyle(el); \
             return rect.width > 0 && rect.height > 0 \
                 && style.visibility !== 'hidden' && style.display !== 'none'; }})()",
            self.to_query()
        )
    }

    /// Human-readable description for error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Css(s) => s.clone(),
            Self::Text(t) => format!("text={t}"),
            Self::CssWithText { css, text } => format!("{css} :text({text})"),
            Self::DataQa(v) => format!("[data-qa=\"{v}\"]"),
            Self::Nth { css, index } => format!("{css}:nth({index})"),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Options for locator behavior
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Timeout for auto-waiting
    pub timeout: Duration,
    /// Polling interval for auto-waiting
    pub poll_interval: Duration,
    /// Whether the element must be visible, not merely attached
    pub visible: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_WAIT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            visible: true,
        }
    }
}

/// A selector paired with wait behavior
#[derive(Debug, Clone)]
pub struct Locator {
    selector: Selector,
    options: LocatorOptions,
}

impl Locator {
    /// Create a locator from a CSS selector
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::Css(selector.into()),
            options: LocatorOptions::default(),
        }
    }

    /// Create a locator from a selector
    #[must_use]
    pub fn from_selector(selector: Selector) -> Self {
        Self {
            selector,
            options: LocatorOptions::default(),
        }
    }

    /// Set a custom timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// Set visibility requirement
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.options.visible = visible;
        self
    }

    /// The selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The options
    #[must_use]
    pub const fn options(&self) -> &LocatorOptions {
        &self.options
    }
}
