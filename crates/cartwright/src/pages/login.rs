//! Login page: the "New User Signup!" entry point.

use crate::browser::Page;
use crate::config::SiteConfig;
use crate::locator::Selector;
use crate::presence::Presence;
use crate::result::CartwrightResult;

use super::{handle_cookie_consent, navigate_to};

/// `data-qa` value of the signup name field
pub const SIGNUP_NAME: &str = "signup-name";
/// `data-qa` value of the signup email field
pub const SIGNUP_EMAIL: &str = "signup-email";
/// `data-qa` value of the signup submit button
pub const SIGNUP_BUTTON: &str = "signup-button";
/// Container that appears once the detailed registration form loads
pub const REGISTRATION_FORM: &str = "#form";
/// Heading of the signup section
pub const SIGNUP_HEADING: &str = "New User Signup!";

/// Page object for the login/signup page
#[derive(Debug, Clone)]
pub struct LoginPage {
    config: SiteConfig,
}

impl LoginPage {
    /// Create the page object
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Navigate to `/login` and deal with the cookie banner
    pub async fn navigate(&self, page: &mut Page) -> CartwrightResult<Presence> {
        navigate_to(page, &self.config, "/login").await?;
        Ok(handle_cookie_consent(page).await)
    }

    /// Whether the "New User Signup!" section is on screen
    pub async fn signup_section_visible(&self, page: &Page) -> CartwrightResult<bool> {
        page.is_visible(&Selector::text(SIGNUP_HEADING)).await
    }

    /// Fill and submit the minimal signup form, then wait for the detailed
    /// registration form to load.
    ///
    /// # Errors
    ///
    /// Fails if the registration form never appears, which signals the
    /// site rejected the signup (e.g. a duplicate email).
    pub async fn signup(&self, page: &Page, name: &str, email: &str) -> CartwrightResult<()> {
        tracing::info!(%name, %email, "submitting signup form");
        page.fill(&Selector::data_qa(SIGNUP_NAME), name).await?;
        page.fill(&Selector::data_qa(SIGNUP_EMAIL), email).await?;
        page.click(&Selector::data_qa(SIGNUP_BUTTON)).await?;
        page.wait_for_selector(&Selector::css(REGISTRATION_FORM))
            .await
    }

    /// Submit the signup form without waiting for the registration form.
    ///
    /// For the negative-validation suites, where the interesting outcome is
    /// that nothing happens: the caller compares the URL before and after.
    pub async fn submit_signup_unchecked(
        &self,
        page: &Page,
        name: &str,
        email: &str,
    ) -> CartwrightResult<()> {
        page.fill(&Selector::data_qa(SIGNUP_NAME), name).await?;
        page.fill(&Selector::data_qa(SIGNUP_EMAIL), email).await?;
        page.click(&Selector::data_qa(SIGNUP_BUTTON)).await
    }

    /// Current value of the signup name field
    pub async fn signup_name_value(&self, page: &Page) -> CartwrightResult<String> {
        page.input_value(&Selector::data_qa(SIGNUP_NAME)).await
    }

    /// Current value of the signup email field
    pub async fn signup_email_value(&self, page: &Page) -> CartwrightResult<String> {
        page.input_value(&Selector::data_qa(SIGNUP_EMAIL)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_fields_use_the_data_qa_contract() {
        let query = Selector::data_qa(SIGNUP_NAME).to_query();
        assert!(query.contains("data-qa"));
        assert!(query.contains("signup-name"));
    }

    #[cfg(not(feature = "browser"))]
    #[tokio::test]
    async fn test_navigate_lands_on_login() {
        let config = SiteConfig::default();
        let login = LoginPage::new(&config);
        let mut page = Page::new(1920, 1080);
        login.navigate(&mut page).await.unwrap();
        assert!(page.current_url().ends_with("/login"));
    }
}
