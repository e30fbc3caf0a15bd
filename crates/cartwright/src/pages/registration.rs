//! Registration page: account details and address form.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::data::{Address, BirthDate, Title};
use crate::locator::Selector;
use crate::presence::Presence;
use crate::result::CartwrightResult;
use crate::wait::{LoadState, WaitOptions};

use super::{handle_cookie_consent, wait_for_element, wait_network_idle};

/// "Mr." gender radio button
pub const TITLE_MR: &str = "#id_gender1";
/// "Mrs." gender radio button
pub const TITLE_MRS: &str = "#id_gender2";
/// Password field
pub const PASSWORD: &str = "#password";
/// Day-of-birth dropdown
pub const DAY: &str = "#days";
/// Month-of-birth dropdown
pub const MONTH: &str = "#months";
/// Year-of-birth dropdown
pub const YEAR: &str = "#years";
/// Newsletter opt-in checkbox
pub const NEWSLETTER: &str = "#newsletter";
/// Special-offers opt-in checkbox
pub const OFFERS: &str = "#optin";
/// First-name field
pub const FIRST_NAME: &str = "#first_name";
/// Last-name field
pub const LAST_NAME: &str = "#last_name";
/// Company field
pub const COMPANY: &str = "#company";
/// Address line 1
pub const ADDRESS1: &str = "#address1";
/// Address line 2
pub const ADDRESS2: &str = "#address2";
/// Country dropdown
pub const COUNTRY: &str = "#country";
/// State field
pub const STATE: &str = "#state";
/// City field
pub const CITY: &str = "#city";
/// Postal-code field
pub const ZIPCODE: &str = "#zipcode";
/// Mobile-number field
pub const MOBILE: &str = "#mobile_number";
/// `data-qa` value of the create-account button
pub const CREATE_ACCOUNT: &str = "create-account";
/// `data-qa` value of the post-success continue link
pub const CONTINUE: &str = "continue-button";
/// `data-qa` value of the "Account Created!" heading
pub const ACCOUNT_CREATED: &str = "account-created";

/// How long to watch for the success heading before concluding it is absent
pub const ACCOUNT_CREATED_TIMEOUT_MS: u64 = 5_000;

/// Page object for the registration form
#[derive(Debug, Clone)]
pub struct RegistrationPage {
    config: SiteConfig,
}

impl RegistrationPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fill the account-information section.
    ///
    /// Both opt-in boxes are checked unconditionally; `dob` values must
    /// match the dropdowns' option values.
    pub async fn fill_account_info(
        &self,
        page: &Page,
        title: Title,
        password: &str,
        dob: &BirthDate,
    ) -> CartwrightResult<()> {
        let radio = match title {
            Title::Mr => TITLE_MR,
            Title::Mrs => TITLE_MRS,
        };
        page.check(&Selector::css(radio)).await?;
        page.fill(&Selector::css(PASSWORD), password).await?;
        page.select_option(&Selector::css(DAY), &dob.day).await?;
        page.select_option(&Selector::css(MONTH), &dob.month).await?;
        page.select_option(&Selector::css(YEAR), &dob.year).await?;
        page.check(&Selector::css(NEWSLETTER)).await?;
        page.check(&Selector::css(OFFERS)).await?;
        Ok(())
    }

    /// Fill the nine address fields
    pub async fn fill_address_info(
        &self,
        page: &Page,
        address: &Address,
    ) -> CartwrightResult<()> {
        tracing::debug!(country = %address.country, city = %address.city, "filling address");
        page.fill(&Selector::css(FIRST_NAME), &address.first_name)
            .await?;
        page.fill(&Selector::css(LAST_NAME), &address.last_name)
            .await?;
        page.fill(&Selector::css(COMPANY), &address.company).await?;
        page.fill(&Selector::css(ADDRESS1), &address.address1).await?;
        page.fill(&Selector::css(ADDRESS2), &address.address2).await?;
        page.select_option(&Selector::css(COUNTRY), &address.country)
            .await?;
        page.fill(&Selector::css(STATE), &address.state).await?;
        page.fill(&Selector::css(CITY), &address.city).await?;
        page.fill(&Selector::css(ZIPCODE), &address.zipcode).await?;
        page.fill(&Selector::css(MOBILE), &address.mobile).await?;
        Ok(())
    }

    /// Submit the registration form.
    ///
    /// Waits for the network to settle, nothing more; success is checked
    /// by the caller via [`Self::account_created`].
    pub async fn submit_registration(&self, page: &Page) -> CartwrightResult<()> {
        page.click(&Selector::data_qa(CREATE_ACCOUNT)).await?;
        wait_network_idle(page, &self.config).await
    }

    /// Probe for the "Account Created!" heading
    pub async fn account_created(&self, page: &Page) -> Presence {
        let heading = Selector::data_qa(ACCOUNT_CREATED);
        let opts = WaitOptions::new().with_timeout(ACCOUNT_CREATED_TIMEOUT_MS);
        match page.wait_for_visible_with(&heading, &opts).await {
            Ok(()) => Presence::Present,
            Err(err) if err.is_timeout() => Presence::Absent,
            Err(_) => Presence::TimedOut,
        }
    }

    /// Click continue after a successful registration
    pub async fn continue_after_registration(&self, page: &Page) -> CartwrightResult<()> {
        let link = Selector::data_qa(CONTINUE);
        wait_for_element(page, &link, self.config.wait.timeout_ms).await?;
        page.click(&link).await?;
        let opts = WaitOptions::new()
            .with_timeout(LoadState::DomContentLoaded.default_timeout_ms())
            .with_poll_interval(self.config.wait.poll_interval_ms);
        page.wait_for_load_state(LoadState::DomContentLoaded, &opts)
            .await?;
        handle_cookie_consent(page).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_radio_mapping() {
        assert_eq!(TITLE_MR, "#id_gender1");
        assert_eq!(TITLE_MRS, "#id_gender2");
    }

    #[test]
    fn test_success_heading_uses_data_qa() {
        let query = Selector::data_qa(ACCOUNT_CREATED).to_query();
        assert!(query.contains("account-created"));
    }

    #[cfg(not(feature = "browser"))]
    #[tokio::test]
    async fn test_account_created_probe_is_conclusive_on_mock() {
        let config = SiteConfig::default();
        let registration = RegistrationPage::new(&config);
        let page = Page::new(1920, 1080);
        let presence = registration.account_created(&page).await;
        assert!(presence.is_conclusive());
    }
}
