//! Test harness: browser lifecycle and page-object wiring.
//!
//! The e2e suites get one harness per test: a browser launched from
//! [`SiteConfig`], a page with console capture attached, and constructors
//! for every page object. Session-isolation checks launch a second,
//! fully separate browser.

use crate::browser::{Browser, Page};
use crate::config::SiteConfig;
use crate::pages::{
    CartPage, CheckoutPage, LoginPage, PaymentPage, ProductsPage, RegistrationPage,
};
use crate::result::CartwrightResult;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialise the tracing subscriber once per process.
///
/// Filtering follows `RUST_LOG`; defaults to `info` for this crate.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cartwright=info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// One test's worth of browser state and page objects
#[derive(Debug)]
pub struct TestHarness {
    config: SiteConfig,
    browser: Browser,
    page: Page,
}

impl TestHarness {
    /// Launch a browser and open a page
    pub async fn launch(config: SiteConfig) -> CartwrightResult<Self> {
        init_tracing();
        let browser = Browser::launch(config.clone()).await?;
        let page = browser.new_page().await?;
        Ok(Self {
            config,
            browser,
            page,
        })
    }

    /// Launch with defaults plus environment overrides
    pub async fn launch_from_env() -> CartwrightResult<Self> {
        Self::launch(SiteConfig::from_env()).await
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The page under test
    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// The page under test, mutably (navigation needs it)
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Open an additional page in the same browser session
    pub async fn extra_page(&self) -> CartwrightResult<Page> {
        self.browser.new_page().await
    }

    /// Launch a second, fully isolated browser.
    ///
    /// Used by the session-management checks: a fresh browser shares no
    /// cookies or storage with this harness.
    pub async fn isolated_browser(&self) -> CartwrightResult<Browser> {
        Browser::launch(self.config.clone()).await
    }

    /// Login page object
    #[must_use]
    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(&self.config)
    }

    /// Registration page object
    #[must_use]
    pub fn registration_page(&self) -> RegistrationPage {
        RegistrationPage::new(&self.config)
    }

    /// Products page object
    #[must_use]
    pub fn products_page(&self) -> ProductsPage {
        ProductsPage::new(&self.config)
    }

    /// Cart page object
    #[must_use]
    pub fn cart_page(&self) -> CartPage {
        CartPage::new(&self.config)
    }

    /// Checkout page object
    #[must_use]
    pub fn checkout_page(&self) -> CheckoutPage {
        CheckoutPage::new(&self.config)
    }

    /// Payment page object
    #[must_use]
    pub fn payment_page(&self) -> PaymentPage {
        PaymentPage::new(&self.config)
    }

    /// Close the browser
    pub async fn close(self) -> CartwrightResult<()> {
        self.browser.close().await
    }
}
