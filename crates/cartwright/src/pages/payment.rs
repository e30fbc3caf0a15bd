//! Payment page: card details and order confirmation.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::data::PaymentCard;
use crate::locator::Selector;
use crate::presence::Presence;
use crate::result::CartwrightResult;
use crate::wait::WaitOptions;

use super::wait_network_idle;

/// Cardholder-name field
pub const NAME_ON_CARD: &str = "input[name=\"name_on_card\"]";
/// Card-number field
pub const CARD_NUMBER: &str = "input[name=\"card_number\"]";
/// CVC field
pub const CVC: &str = "input[name=\"cvc\"]";
/// Expiry-month field
pub const EXPIRY_MONTH: &str = "input[name=\"expiry_month\"]";
/// Expiry-year field
pub const EXPIRY_YEAR: &str = "input[name=\"expiry_year\"]";
/// `data-qa` value of the pay button
pub const PAY_BUTTON: &str = "pay-button";

/// Settle delay after payment submission.
///
/// The order confirmation renders asynchronously with nothing stable to
/// wait on; this is a concession, not a synchronization point.
pub const CONFIRMATION_SETTLE_MS: u64 = 2_000;

/// How long to watch for the congratulations message
pub const SUCCESS_TIMEOUT_MS: u64 = 5_000;

/// Page object for the payment page
#[derive(Debug, Clone)]
pub struct PaymentPage {
    config: SiteConfig,
}

impl PaymentPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fill the five payment fields
    pub async fn fill_payment_details(
        &self,
        page: &Page,
        card: &PaymentCard,
    ) -> CartwrightResult<()> {
        page.fill(&Selector::css(NAME_ON_CARD), &card.name_on_card)
            .await?;
        page.fill(&Selector::css(CARD_NUMBER), &card.card_number)
            .await?;
        page.fill(&Selector::css(CVC), &card.cvc).await?;
        page.fill(&Selector::css(EXPIRY_MONTH), &card.expiry_month)
            .await?;
        page.fill(&Selector::css(EXPIRY_YEAR), &card.expiry_year)
            .await?;
        Ok(())
    }

    /// Submit payment and let the confirmation render
    pub async fn confirm_payment(&self, page: &Page) -> CartwrightResult<()> {
        tracing::info!("confirming payment");
        page.click(&Selector::data_qa(PAY_BUTTON)).await?;
        wait_network_idle(page, &self.config).await?;
        page.wait_for_timeout(CONFIRMATION_SETTLE_MS).await;
        Ok(())
    }

    /// Probe for the congratulations message.
    ///
    /// Usable as a plain predicate in assertions via
    /// [`Presence::is_present`]; an inconclusive probe stays visible to
    /// the caller instead of being swallowed.
    pub async fn verify_success(&self, page: &Page) -> Presence {
        let message = Selector::css("p").with_text("Congratulations");
        let opts = WaitOptions::new().with_timeout(SUCCESS_TIMEOUT_MS);
        match page.wait_for_visible_with(&message, &opts).await {
            Ok(()) => Presence::Present,
            Err(err) if err.is_timeout() => Presence::Absent,
            Err(_) => Presence::TimedOut,
        }
    }
}
