//! Cart page: reading contents and removing products.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::locator::Selector;
use crate::result::{CartwrightError, CartwrightResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::wait_network_idle;

/// Header link to the cart
pub const CART_LINK: &str = "a[href=\"/view_cart\"]";
/// Rows of the cart table
pub const CART_ROWS: &str = "#cart_info_table tbody tr";
/// Delete button within a row
pub const ROW_DELETE: &str = "#cart_info_table tbody tr .cart_delete a.cart_quantity_delete";
/// Proceed-to-checkout button
pub const PROCEED_TO_CHECKOUT: &str = "a.btn.btn-default.check_out";
/// Span shown when the cart is empty
pub const EMPTY_CART: &str = "#empty_cart";

/// One row of the cart table, read back as the page renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Product name
    pub name: String,
    /// Unit price as displayed (e.g. `"Rs. 500"`)
    pub price: String,
    /// Quantity as displayed
    pub quantity: String,
    /// Line total as displayed
    pub total: String,
}

impl CartProduct {
    fn parse_amount(text: &str) -> Option<u32> {
        // Prices render as "Rs. 500"
        let digits = Regex::new(r"(\d+)").ok()?;
        digits
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Unit price in rupees, if the displayed string parses
    #[must_use]
    pub fn price_value(&self) -> Option<u32> {
        Self::parse_amount(&self.price)
    }

    /// Quantity, if the displayed string parses
    #[must_use]
    pub fn quantity_value(&self) -> Option<u32> {
        self.quantity.trim().parse().ok()
    }

    /// Line total in rupees, if the displayed string parses
    #[must_use]
    pub fn total_value(&self) -> Option<u32> {
        Self::parse_amount(&self.total)
    }

    /// Whether the displayed total equals unit price × quantity
    #[must_use]
    pub fn total_is_consistent(&self) -> bool {
        match (self.price_value(), self.quantity_value(), self.total_value()) {
            (Some(price), Some(quantity), Some(total)) => price * quantity == total,
            _ => false,
        }
    }
}

/// Page object for the shopping cart
#[derive(Debug, Clone)]
pub struct CartPage {
    config: SiteConfig,
}

impl CartPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Open the cart from the header link
    pub async fn navigate(&self, page: &Page) -> CartwrightResult<()> {
        page.click(&Selector::css(CART_LINK)).await?;
        wait_network_idle(page, &self.config).await
    }

    /// Read every product row currently in the cart.
    ///
    /// Rows that do not carry the expected name/price/quantity/total
    /// structure are skipped rather than failing the whole read.
    pub async fn get_products(&self, page: &Page) -> CartwrightResult<Vec<CartProduct>> {
        let expr = format!(
            "(() => Array.from(document.querySelectorAll({CART_ROWS:?})).map(row => {{ \
                 const name = row.querySelector('.cart_description h4 a'); \
                 const price = row.querySelector('.cart_price p'); \
                 const quantity = row.querySelector('.cart_quantity button'); \
                 const total = row.querySelector('.cart_total_price'); \
                 if (!name || !price || !quantity || !total) return null; \
                 return {{ name: name.innerText.trim(), price: price.innerText.trim(), \
                           quantity: quantity.innerText.trim(), total: total.innerText.trim() }}; \
             }}))()"
        );
        let rows: Vec<Option<CartProduct>> = page.evaluate(&expr).await?;
        let total = rows.len();
        let products: Vec<CartProduct> = rows.into_iter().flatten().collect();
        if products.len() < total {
            tracing::debug!(
                skipped = total - products.len(),
                "skipped cart rows without the expected structure"
            );
        }
        Ok(products)
    }

    /// Remove the row whose product name matches exactly
    pub async fn remove_product(&self, page: &Page, name: &str) -> CartwrightResult<()> {
        tracing::info!(product = %name, "removing product from cart");
        let expr = format!(
            "(() => {{ const rows = Array.from(document.querySelectorAll({CART_ROWS:?})); \
             return rows.findIndex(row => {{ \
                 const link = row.querySelector('.cart_description h4 a'); \
                 return link && link.innerText.trim() === {name:?}; }}); }})()"
        );
        let index: i64 = page.evaluate(&expr).await?;
        let index = usize::try_from(index).map_err(|_| CartwrightError::ProductNotFound {
            name: name.to_string(),
        })?;
        let before = self.row_count(page).await?;
        page.click(&Selector::nth(ROW_DELETE, index)).await?;
        self.wait_for_row_count(page, before.saturating_sub(1)).await
    }

    /// Remove whichever product is listed first
    pub async fn remove_first_product(&self, page: &Page) -> CartwrightResult<()> {
        let before = self.row_count(page).await?;
        if before == 0 {
            return Err(CartwrightError::assertion("cart is already empty"));
        }
        page.click(&Selector::nth(ROW_DELETE, 0)).await?;
        self.wait_for_row_count(page, before - 1).await
    }

    /// Number of product rows currently rendered
    pub async fn row_count(&self, page: &Page) -> CartwrightResult<usize> {
        page.count(&Selector::css(CART_ROWS)).await
    }

    /// Whether the cart shows as empty (no rows, or the empty-cart message)
    pub async fn is_empty(&self, page: &Page) -> CartwrightResult<bool> {
        if self.row_count(page).await? == 0 {
            return Ok(true);
        }
        page.is_visible(&Selector::css(EMPTY_CART)).await
    }

    /// Wait until at most `expected` rows remain.
    ///
    /// Row removal is an async round-trip on the storefront, so the table
    /// shrinks some time after the delete click.
    async fn wait_for_row_count(&self, page: &Page, expected: usize) -> CartwrightResult<()> {
        let polls = (self.config.wait.timeout_ms / self.config.wait.poll_interval_ms).max(1);
        for _ in 0..polls {
            if self.row_count(page).await? <= expected {
                return Ok(());
            }
            page.wait_for_timeout(self.config.wait.poll_interval_ms).await;
        }
        Err(CartwrightError::timeout(
            self.config.wait.timeout_ms,
            format!("cart to shrink to {expected} rows"),
        ))
    }

    /// Click proceed-to-checkout and wait for the checkout page
    pub async fn proceed_to_checkout(&self, page: &Page) -> CartwrightResult<()> {
        page.click(&Selector::css(PROCEED_TO_CHECKOUT)).await?;
        wait_network_idle(page, &self.config).await
    }
}
