//! Products page: discovery, filtering, and cart-add actions.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::locator::Selector;
use crate::result::{CartwrightError, CartwrightResult};
use crate::wait::WaitOptions;

use super::{wait_network_idle, SCROLL_SETTLE_MS};

/// Header link to the products listing
pub const PRODUCTS_LINK: &str = "a[href=\"/products\"]";
/// Container of the product grid
pub const FEATURES_ITEMS: &str = ".features_items";
/// One product tile
pub const SINGLE_PRODUCT: &str = ".single-products";
/// Product name inside a tile
pub const PRODUCT_NAME: &str = ".single-products .productinfo p";
/// Add-to-cart button revealed by the hover overlay
pub const OVERLAY_ADD_TO_CART: &str = ".single-products .overlay-content .add-to-cart";
/// Confirmation modal shown after adding to cart
pub const CART_MODAL: &str = "#cartModal";
/// Heading above the grid (changes with the active brand/category filter)
pub const GRID_HEADING: &str = ".features_items h2.title";
/// Brand links in the static sidebar
pub const BRAND_LINKS: &str = ".brands-name a";
/// Sidebar section listing the brands
pub const BRANDS_SECTION: &str = ".brands_products";

/// Settle delay after expanding a collapsible category panel
pub const PANEL_EXPAND_SETTLE_MS: u64 = 1_000;
/// Settle delay after a filter changes the grid
pub const FILTER_SETTLE_MS: u64 = 1_000;

/// Page object for the products listing
#[derive(Debug, Clone)]
pub struct ProductsPage {
    config: SiteConfig,
}

impl ProductsPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Open the products listing from the header link
    pub async fn navigate(&self, page: &Page) -> CartwrightResult<()> {
        page.click(&Selector::css(PRODUCTS_LINK)).await?;
        page.wait_for_selector(&Selector::css(FEATURES_ITEMS)).await
    }

    /// Filter by category and subcategory.
    ///
    /// Expands the category panel only if it is currently collapsed, then
    /// dispatches a DOM-level click on the subcategory link; the sidebar's
    /// CSS transitions make trusted clicks race against the animation.
    pub async fn filter_by_category(
        &self,
        page: &Page,
        category: &str,
        subcategory: &str,
    ) -> CartwrightResult<()> {
        tracing::info!(%category, %subcategory, "filtering by category");
        let panel_link = Selector::css(format!(".panel-heading a[href=\"#{category}\"]"));
        let class = page.attribute(&panel_link, "class").await?.unwrap_or_default();
        if class.contains("collapsed") {
            page.click(&panel_link).await?;
            page.wait_for_timeout(PANEL_EXPAND_SETTLE_MS).await;
        }

        let subcategory_link =
            Selector::css(format!("#{category} a")).with_text(subcategory);
        page.click_js(&subcategory_link).await?;

        page.wait_for_selector(&Selector::css(FEATURES_ITEMS)).await?;
        page.wait_for_timeout(FILTER_SETTLE_MS).await;
        Ok(())
    }

    /// Filter by a brand from the static sidebar list
    pub async fn filter_by_brand(&self, page: &Page, brand: &str) -> CartwrightResult<()> {
        tracing::info!(%brand, "filtering by brand");
        page.scroll_into_view(&Selector::css(BRANDS_SECTION)).await?;
        let link = Selector::css(BRAND_LINKS).with_text(brand);
        page.click(&link).await?;
        page.wait_for_selector(&Selector::css(FEATURES_ITEMS)).await?;
        page.wait_for_timeout(FILTER_SETTLE_MS).await;
        Ok(())
    }

    /// The grid heading, which names the active brand/category filter
    pub async fn grid_heading(&self, page: &Page) -> CartwrightResult<String> {
        page.inner_text(&Selector::css(GRID_HEADING)).await
    }

    /// Number of product tiles currently listed
    pub async fn product_count(&self, page: &Page) -> CartwrightResult<usize> {
        page.count(&Selector::css(SINGLE_PRODUCT)).await
    }

    /// Index of the tile whose visible name matches `product_name` exactly
    async fn tile_index(&self, page: &Page, product_name: &str) -> CartwrightResult<usize> {
        let expr = format!(
            "(() => {{ const tiles = Array.from(document.querySelectorAll({SINGLE_PRODUCT:?})); \
             return tiles.findIndex(tile => {{ \
                 const name = tile.querySelector('.productinfo p'); \
                 return name && name.innerText.trim() === {product_name:?}; }}); }})()"
        );
        let index: i64 = page.evaluate(&expr).await?;
        usize::try_from(index).map_err(|_| CartwrightError::ProductNotFound {
            name: product_name.to_string(),
        })
    }

    /// Add a product to the cart by its exact visible name.
    ///
    /// The add-to-cart button only exists in the hover overlay, so the tile
    /// is scrolled into view and hovered first.
    pub async fn add_product_by_name(
        &self,
        page: &Page,
        product_name: &str,
        continue_shopping: bool,
    ) -> CartwrightResult<()> {
        tracing::info!(product = %product_name, "adding product to cart");
        let index = self.tile_index(page, product_name).await?;
        self.add_tile(page, index, continue_shopping).await
    }

    /// Add the product at 1-based `position`, returning its resolved name.
    ///
    /// Names are not known in advance when selecting "the Nth item"; the
    /// return value lets callers track what was actually added.
    pub async fn add_nth_product(
        &self,
        page: &Page,
        position: usize,
        continue_shopping: bool,
    ) -> CartwrightResult<String> {
        let available = self.product_count(page).await?;
        if position == 0 || position > available {
            return Err(CartwrightError::PositionOutOfRange {
                position,
                available,
            });
        }
        let index = position - 1;
        let name = page
            .inner_text(&Selector::nth(PRODUCT_NAME, index))
            .await?;
        tracing::info!(product = %name, position, "adding nth product to cart");
        self.add_tile(page, index, continue_shopping).await?;
        Ok(name)
    }

    async fn add_tile(
        &self,
        page: &Page,
        index: usize,
        continue_shopping: bool,
    ) -> CartwrightResult<()> {
        let tile = Selector::nth(SINGLE_PRODUCT, index);
        page.scroll_into_view(&tile).await?;
        page.wait_for_timeout(SCROLL_SETTLE_MS).await;

        page.hover(&tile).await?;
        page.wait_for_timeout(SCROLL_SETTLE_MS).await;

        let add_button = Selector::nth(OVERLAY_ADD_TO_CART, index);
        page.click(&add_button).await?;

        page.wait_for_visible(&Selector::css(CART_MODAL)).await?;

        if continue_shopping {
            let continue_button = Selector::css("button").with_text("Continue Shopping");
            page.click(&continue_button).await?;
            let opts = WaitOptions::new().with_timeout(self.config.wait.timeout_ms);
            page.wait_for_hidden(&Selector::css(CART_MODAL), &opts).await?;
        }
        Ok(())
    }

    /// Follow the modal's "View Cart" link
    pub async fn go_to_cart(&self, page: &Page) -> CartwrightResult<()> {
        let link = Selector::css("a").with_text("View Cart");
        page.click(&link).await?;
        wait_network_idle(page, &self.config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_button_tracks_tile_order() {
        // One overlay button per tile, so nth-button aligns with nth-tile
        let query = Selector::nth(OVERLAY_ADD_TO_CART, 3).to_query();
        assert!(query.contains(".overlay-content .add-to-cart"));
        assert!(query.ends_with("[3]"));
    }

    #[test]
    fn test_category_panel_selector_shape() {
        let selector = format!(".panel-heading a[href=\"#{}\"]", "Women");
        assert_eq!(selector, ".panel-heading a[href=\"#Women\"]");
    }

    #[cfg(not(feature = "browser"))]
    #[tokio::test]
    async fn test_nth_position_zero_is_rejected() {
        let config = SiteConfig::default();
        let products = ProductsPage::new(&config);
        let page = Page::new(1920, 1080);
        // Mock count errors before the range check can pass
        let result = products.add_nth_product(&page, 0, true).await;
        assert!(result.is_err());
    }
}
