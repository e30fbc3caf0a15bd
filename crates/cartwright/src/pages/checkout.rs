//! Checkout page: order review, comment, and place-order.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::locator::Selector;
use crate::result::CartwrightResult;

use super::{scroll_to_element, wait_network_idle};

/// Free-text order note
pub const COMMENT: &str = "textarea[name=\"message\"]";
/// Place-order link
pub const PLACE_ORDER: &str = "a[href=\"/payment\"]";

/// Page object for the checkout page
#[derive(Debug, Clone)]
pub struct CheckoutPage {
    config: SiteConfig,
}

impl CheckoutPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fill the order-comment field
    pub async fn add_comment(&self, page: &Page, comment: &str) -> CartwrightResult<()> {
        let field = Selector::css(COMMENT);
        scroll_to_element(page, &field).await?;
        page.fill(&field, comment).await
    }

    /// Click place-order and wait for the payment page
    pub async fn place_order(&self, page: &Page) -> CartwrightResult<()> {
        page.click(&Selector::css(PLACE_ORDER)).await?;
        wait_network_idle(page, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_targets_the_payment_route() {
        assert!(PLACE_ORDER.contains("/payment"));
    }
}
