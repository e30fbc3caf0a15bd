//! Page objects for the storefront.
//!
//! One type per logical page, each exposing intention-revealing operations
//! that wrap raw element lookups. All selectors live inside the page object
//! that owns them; a markup change on the site means editing one type, not
//! every test.

mod cart;
mod checkout;
mod login;
mod payment;
mod products;
mod registration;

pub use cart::{CartPage, CartProduct};
pub use checkout::CheckoutPage;
pub use login::LoginPage;
pub use payment::PaymentPage;
pub use products::ProductsPage;
pub use registration::RegistrationPage;

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::locator::Selector;
use crate::presence::Presence;
use crate::result::CartwrightResult;
use crate::wait::{LoadState, WaitOptions};

/// The cookie-consent button injected by the site's ad provider
pub const COOKIE_CONSENT_BUTTON: &str = ".fc-button.fc-cta-consent";

/// How long to watch for the consent banner before concluding it is absent
pub const COOKIE_CONSENT_TIMEOUT_MS: u64 = 5_000;

/// Settle delay after dismissing the banner
pub const COOKIE_CONSENT_SETTLE_MS: u64 = 1_000;

/// Settle delay after scrolling an element into view
pub const SCROLL_SETTLE_MS: u64 = 500;

/// Navigate to a path under the configured base URL and wait for the
/// network to go quiet.
pub async fn navigate_to(
    page: &mut Page,
    config: &SiteConfig,
    path: &str,
) -> CartwrightResult<()> {
    let url = config.url_for(path);
    tracing::debug!(%url, "navigating");
    page.goto(&url).await?;
    wait_network_idle(page, config).await
}

/// Wait for the network-idle heuristic with the navigation timeout
pub async fn wait_network_idle(page: &Page, config: &SiteConfig) -> CartwrightResult<()> {
    let opts = WaitOptions::new()
        .with_timeout(LoadState::NetworkIdle.default_timeout_ms())
        .with_poll_interval(config.wait.poll_interval_ms)
        .with_wait_until(LoadState::NetworkIdle);
    page.wait_for_load_state(LoadState::NetworkIdle, &opts).await
}

/// Best-effort dismissal of the cookie banner.
///
/// The banner is injected non-deterministically, so [`Presence::Absent`]
/// is a normal outcome. [`Presence::TimedOut`] means the banner showed up
/// but dismissing it failed; that one is worth a look.
pub async fn handle_cookie_consent(page: &Page) -> Presence {
    let button = Selector::css(COOKIE_CONSENT_BUTTON);
    let opts = WaitOptions::new().with_timeout(COOKIE_CONSENT_TIMEOUT_MS);
    match page.wait_for_visible_with(&button, &opts).await {
        Ok(()) => match page.click(&button).await {
            Ok(()) => {
                page.wait_for_timeout(COOKIE_CONSENT_SETTLE_MS).await;
                tracing::debug!("cookie consent dismissed");
                Presence::Present
            }
            Err(err) => {
                tracing::warn!(%err, "cookie consent appeared but could not be dismissed");
                Presence::TimedOut
            }
        },
        Err(err) if err.is_timeout() => Presence::Absent,
        Err(err) => {
            tracing::warn!(%err, "cookie consent probe failed");
            Presence::TimedOut
        }
    }
}

/// Wait for an element to be visible within `timeout_ms`
pub async fn wait_for_element(
    page: &Page,
    selector: &Selector,
    timeout_ms: u64,
) -> CartwrightResult<()> {
    let opts = WaitOptions::new().with_timeout(timeout_ms);
    page.wait_for_visible_with(selector, &opts).await
}

/// Scroll an element into view and let the layout settle
pub async fn scroll_to_element(page: &Page, selector: &Selector) -> CartwrightResult<()> {
    page.scroll_into_view(selector).await?;
    page.wait_for_timeout(SCROLL_SETTLE_MS).await;
    Ok(())
}
