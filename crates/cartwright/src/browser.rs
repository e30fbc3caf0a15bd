//! Browser control for headless testing.
//!
//! Real browser control goes through the Chrome DevTools Protocol. When
//! compiled with the `browser` feature, chromiumoxide provides the CDP
//! connection; without the feature, a mock implementation with identical
//! signatures keeps the page-object layer compiling for unit tests.
//!
//! Interactions that must be trusted events (click, hover) are dispatched
//! through the CDP Input domain; everything else is evaluated JavaScript
//! built from [`Selector`](crate::locator::Selector) queries.

use crate::config::{RetryPolicy, SiteConfig};
use crate::locator::Selector;
use crate::result::{CartwrightError, CartwrightResult};
use crate::wait::{LoadState, WaitOptions, NETWORK_IDLE_THRESHOLD_MS};
use serde::{Deserialize, Serialize};

/// A console message captured from the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    /// Console level (`log`, `warning`, `error`, ...)
    pub level: String,
    /// Message text
    pub text: String,
}

/// A cookie read back from the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie is scoped to
    pub domain: String,
    /// Path the cookie is scoped to
    pub path: String,
    /// Whether the cookie is HttpOnly
    pub http_only: bool,
    /// Whether the cookie is Secure
    pub secure: bool,
}

/// In-page probe returning the main document's response headers.
///
/// Header access goes through a same-origin `fetch` of the current URL;
/// this sees everything the header analysis needs without wiring up CDP
/// network events.
pub const HEADERS_PROBE_JS: &str = "(async () => { \
    const res = await fetch(window.location.href, { cache: 'no-store' }); \
    const headers = {}; \
    res.headers.forEach((value, key) => { headers[key] = value; }); \
    return headers; })()";

// ============================================================================
// Real CDP implementation (when `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::*;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::input::{
        DispatchMouseEventParams, DispatchMouseEventType, MouseButton,
    };
    use chromiumoxide::cdp::browser_protocol::page::{
        CaptureScreenshotFormat, CaptureScreenshotParams,
    };
    use chromiumoxide::cdp::js_protocol::runtime::{EvaluateParams, EventConsoleApiCalled};
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex as StdMutex};
    use std::time::Instant;
    use tokio::sync::Mutex;

    #[derive(Debug, Deserialize)]
    struct CenterPoint {
        x: f64,
        y: f64,
    }

    /// Browser instance with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: SiteConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a browser configured from [`SiteConfig`]
        ///
        /// # Errors
        ///
        /// Returns an error if the browser cannot be launched
        pub async fn launch(config: SiteConfig) -> CartwrightResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height)
                // CI containers run without a usable sandbox
                .no_sandbox();

            if !config.headless {
                builder = builder.with_head();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            if config.ignore_https_errors {
                builder = builder.arg("--ignore-certificate-errors");
            }

            let cdp_config = builder
                .build()
                .map_err(|e| CartwrightError::BrowserLaunch { message: e })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| CartwrightError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            // Drive the CDP message loop for the lifetime of the browser
            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Open a new page with a console-message listener attached
        ///
        /// # Errors
        ///
        /// Returns an error if the page cannot be created
        pub async fn new_page(&self) -> CartwrightResult<Page> {
            let browser = self.inner.lock().await;
            let cdp_page =
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| CartwrightError::Page {
                        message: e.to_string(),
                    })?;

            let console: Arc<StdMutex<Vec<ConsoleMessage>>> = Arc::default();
            let mut events = cdp_page
                .event_listener::<EventConsoleApiCalled>()
                .await
                .map_err(|e| CartwrightError::Page {
                    message: e.to_string(),
                })?;
            let sink = Arc::clone(&console);
            tokio::spawn(async move {
                while let Some(event) = events.next().await {
                    let text = event
                        .args
                        .iter()
                        .filter_map(|arg| {
                            arg.value
                                .as_ref()
                                .map(|v| match v {
                                    serde_json::Value::String(s) => s.clone(),
                                    other => other.to_string(),
                                })
                                .or_else(|| arg.description.clone())
                        })
                        .collect::<Vec<_>>()
                        .join(" ");
                    let level = format!("{:?}", event.r#type).to_lowercase();
                    if let Ok(mut logs) = sink.lock() {
                        logs.push(ConsoleMessage { level, text });
                    }
                }
            });

            Ok(Page {
                width: self.config.viewport_width,
                height: self.config.viewport_height,
                url: String::from("about:blank"),
                wait: self.config.wait.clone(),
                retry: self.config.retry,
                inner: Some(Arc::new(Mutex::new(cdp_page))),
                console,
            })
        }

        /// The configuration this browser was launched with
        #[must_use]
        pub const fn config(&self) -> &SiteConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> CartwrightResult<()> {
            let mut browser = self.inner.lock().await;
            browser
                .close()
                .await
                .map_err(|e| CartwrightError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// A browser page with a live CDP connection
    #[derive(Debug)]
    pub struct Page {
        /// Viewport width
        pub width: u32,
        /// Viewport height
        pub height: u32,
        url: String,
        wait: WaitOptions,
        retry: RetryPolicy,
        inner: Option<Arc<Mutex<CdpPage>>>,
        console: Arc<StdMutex<Vec<ConsoleMessage>>>,
    }

    impl Page {
        /// Create a detached page (no CDP connection) for unit tests
        #[must_use]
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                url: String::from("about:blank"),
                wait: WaitOptions::default(),
                retry: RetryPolicy::default(),
                inner: None,
                console: Arc::default(),
            }
        }

        fn cdp(&self) -> CartwrightResult<&Arc<Mutex<CdpPage>>> {
            self.inner.as_ref().ok_or_else(|| CartwrightError::Page {
                message: "no browser connection".to_string(),
            })
        }

        /// Navigate to a URL and wait for the `load` event
        ///
        /// # Errors
        ///
        /// Returns an error if navigation fails or the load wait times out
        pub async fn goto(&mut self, url: &str) -> CartwrightResult<()> {
            {
                let inner = self.cdp()?;
                let page = inner.lock().await;
                page.goto(url)
                    .await
                    .map_err(|e| CartwrightError::Navigation {
                        url: url.to_string(),
                        message: e.to_string(),
                    })?;
            }
            self.url = url.to_string();
            let opts = WaitOptions::new()
                .with_timeout(LoadState::Load.default_timeout_ms())
                .with_poll_interval(self.wait.poll_interval_ms);
            self.wait_for_load_state(LoadState::Load, &opts).await
        }

        /// Wait for the given load state.
        ///
        /// Network idle is approximated as `document.readyState === "complete"`
        /// followed by a quiet window of [`NETWORK_IDLE_THRESHOLD_MS`].
        pub async fn wait_for_load_state(
            &self,
            state: LoadState,
            opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            let expr = match state {
                LoadState::Load | LoadState::NetworkIdle => {
                    "document.readyState === 'complete'"
                }
                LoadState::DomContentLoaded => {
                    "document.readyState === 'interactive' || document.readyState === 'complete'"
                }
            };
            self.poll_js_bool(expr, opts, &format!("load state {state}"))
                .await?;
            if state == LoadState::NetworkIdle {
                tokio::time::sleep(std::time::Duration::from_millis(NETWORK_IDLE_THRESHOLD_MS))
                    .await;
            }
            Ok(())
        }

        /// Evaluate a JavaScript expression and deserialize the result
        ///
        /// # Errors
        ///
        /// Returns an error if evaluation fails or the result does not
        /// deserialize into `T`
        pub async fn evaluate<T: serde::de::DeserializeOwned>(
            &self,
            expr: &str,
        ) -> CartwrightResult<T> {
            let inner = self.cdp()?;
            let page = inner.lock().await;
            let result = page.evaluate(expr).await.map_err(|e| CartwrightError::Eval {
                message: e.to_string(),
            })?;
            result.into_value().map_err(|e| CartwrightError::Eval {
                message: e.to_string(),
            })
        }

        /// Evaluate an async JavaScript expression (a promise) and
        /// deserialize the settled value
        pub async fn evaluate_async<T: serde::de::DeserializeOwned>(
            &self,
            expr: &str,
        ) -> CartwrightResult<T> {
            let inner = self.cdp()?;
            let page = inner.lock().await;
            let params = EvaluateParams::builder()
                .expression(expr)
                .await_promise(true)
                .return_by_value(true)
                .build()
                .map_err(|e| CartwrightError::Eval { message: e })?;
            let result = page
                .evaluate(params)
                .await
                .map_err(|e| CartwrightError::Eval {
                    message: e.to_string(),
                })?;
            result.into_value().map_err(|e| CartwrightError::Eval {
                message: e.to_string(),
            })
        }

        async fn element_center(&self, selector: &Selector) -> CartwrightResult<(f64, f64)> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return null; \
                 const r = el.getBoundingClientRect(); \
                 return {{ x: r.x + r.width / 2, y: r.y + r.height / 2 }}; }})()",
                selector.to_query()
            );
            let point: Option<CenterPoint> = self.evaluate(&expr).await?;
            point
                .map(|p| (p.x, p.y))
                .ok_or_else(|| CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
        }

        /// Click an element with trusted CDP mouse events
        ///
        /// # Errors
        ///
        /// Returns an error if the element is not found or dispatch fails
        pub async fn click(&self, selector: &Selector) -> CartwrightResult<()> {
            self.scroll_into_view(selector).await?;
            let (x, y) = self.element_center(selector).await?;
            let inner = self.cdp()?;
            let page = inner.lock().await;

            let move_params = DispatchMouseEventParams::builder()
                .r#type(DispatchMouseEventType::MouseMoved)
                .x(x)
                .y(y)
                .build()
                .map_err(|e| CartwrightError::Input { message: e })?;
            page.execute(move_params)
                .await
                .map_err(|e| CartwrightError::Input {
                    message: e.to_string(),
                })?;

            let press_params = DispatchMouseEventParams::builder()
                .r#type(DispatchMouseEventType::MousePressed)
                .x(x)
                .y(y)
                .button(MouseButton::Left)
                .click_count(1)
                .build()
                .map_err(|e| CartwrightError::Input { message: e })?;
            page.execute(press_params)
                .await
                .map_err(|e| CartwrightError::Input {
                    message: e.to_string(),
                })?;

            let release_params = DispatchMouseEventParams::builder()
                .r#type(DispatchMouseEventType::MouseReleased)
                .x(x)
                .y(y)
                .button(MouseButton::Left)
                .click_count(1)
                .build()
                .map_err(|e| CartwrightError::Input { message: e })?;
            page.execute(release_params)
                .await
                .map_err(|e| CartwrightError::Input {
                    message: e.to_string(),
                })?;

            Ok(())
        }

        /// Click an element by dispatching `el.click()` in the page.
        ///
        /// Bypasses visibility and animation timing; the category sidebar's
        /// CSS transitions make the trusted-event path unreliable there.
        pub async fn click_js(&self, selector: &Selector) -> CartwrightResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; el.click(); return true; }})()",
                selector.to_query()
            );
            let clicked: bool = self.evaluate(&expr).await?;
            if clicked {
                Ok(())
            } else {
                Err(CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Move the mouse over an element (reveals hover-only overlays)
        pub async fn hover(&self, selector: &Selector) -> CartwrightResult<()> {
            self.scroll_into_view(selector).await?;
            let (x, y) = self.element_center(selector).await?;
            let inner = self.cdp()?;
            let page = inner.lock().await;
            let params = DispatchMouseEventParams::builder()
                .r#type(DispatchMouseEventType::MouseMoved)
                .x(x)
                .y(y)
                .build()
                .map_err(|e| CartwrightError::Input { message: e })?;
            page.execute(params)
                .await
                .map_err(|e| CartwrightError::Input {
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Fill an input with text, firing `input` and `change` events
        pub async fn fill(&self, selector: &Selector, text: &str) -> CartwrightResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; el.focus(); \
                 el.value = {text:?}; \
                 el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_query()
            );
            let filled: bool = self.evaluate(&expr).await?;
            if filled {
                Ok(())
            } else {
                Err(CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Check a checkbox or radio button
        pub async fn check(&self, selector: &Selector) -> CartwrightResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; el.checked = true; \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_query()
            );
            let checked: bool = self.evaluate(&expr).await?;
            if checked {
                Ok(())
            } else {
                Err(CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Select a `<select>` option by value or visible label
        pub async fn select_option(
            &self,
            selector: &Selector,
            value: &str,
        ) -> CartwrightResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 const option = Array.from(el.options).find(o => \
                     o.value === {value:?} || o.textContent.trim() === {value:?}); \
                 if (!option) return false; \
                 el.value = option.value; \
                 el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
                 return true; }})()",
                selector.to_query()
            );
            let selected: bool = self.evaluate(&expr).await?;
            if selected {
                Ok(())
            } else {
                Err(CartwrightError::ElementNotFound {
                    selector: format!("{} option {value:?}", selector.describe()),
                })
            }
        }

        /// Scroll an element into the center of the viewport
        pub async fn scroll_into_view(&self, selector: &Selector) -> CartwrightResult<()> {
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return false; \
                 el.scrollIntoView({{ block: 'center' }}); return true; }})()",
                selector.to_query()
            );
            let found: bool = self.evaluate(&expr).await?;
            if found {
                Ok(())
            } else {
                Err(CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
            }
        }

        /// Trimmed `innerText` of the matched element
        pub async fn inner_text(&self, selector: &Selector) -> CartwrightResult<String> {
            let expr = format!(
                "(() => {{ const el = {}; return el ? el.innerText.trim() : null; }})()",
                selector.to_query()
            );
            let text: Option<String> = self.evaluate(&expr).await?;
            text.ok_or_else(|| CartwrightError::ElementNotFound {
                selector: selector.describe(),
            })
        }

        /// Current value of the matched input element
        pub async fn input_value(&self, selector: &Selector) -> CartwrightResult<String> {
            let expr = format!(
                "(() => {{ const el = {}; return el ? el.value : null; }})()",
                selector.to_query()
            );
            let value: Option<String> = self.evaluate(&expr).await?;
            value.ok_or_else(|| CartwrightError::ElementNotFound {
                selector: selector.describe(),
            })
        }

        /// An attribute of the matched element (None when unset)
        pub async fn attribute(
            &self,
            selector: &Selector,
            name: &str,
        ) -> CartwrightResult<Option<String>> {
            #[derive(Deserialize)]
            struct Attr {
                value: Option<String>,
            }
            let expr = format!(
                "(() => {{ const el = {}; if (!el) return null; \
                 return {{ value: el.getAttribute({name:?}) }}; }})()",
                selector.to_query()
            );
            let attr: Option<Attr> = self.evaluate(&expr).await?;
            attr.map(|a| a.value)
                .ok_or_else(|| CartwrightError::ElementNotFound {
                    selector: selector.describe(),
                })
        }

        /// Number of elements matching the selector
        pub async fn count(&self, selector: &Selector) -> CartwrightResult<usize> {
            self.evaluate(&selector.to_count_query()).await
        }

        /// Whether the matched element is currently visible
        pub async fn is_visible(&self, selector: &Selector) -> CartwrightResult<bool> {
            self.evaluate(&selector.to_visible_query()).await
        }

        /// Wait for the element to become visible (default options)
        pub async fn wait_for_visible(&self, selector: &Selector) -> CartwrightResult<()> {
            let opts = self.wait.clone();
            self.wait_for_visible_with(selector, &opts).await
        }

        /// Wait for the element to become visible
        pub async fn wait_for_visible_with(
            &self,
            selector: &Selector,
            opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            let expr = selector.to_visible_query();
            self.poll_js_bool(&expr, opts, &format!("{} to be visible", selector.describe()))
                .await
        }

        /// Wait for the element to disappear
        pub async fn wait_for_hidden(
            &self,
            selector: &Selector,
            opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            let expr = format!("!({})", selector.to_visible_query());
            self.poll_js_bool(&expr, opts, &format!("{} to be hidden", selector.describe()))
                .await
        }

        /// Wait for the element to be attached to the DOM (default options)
        pub async fn wait_for_selector(&self, selector: &Selector) -> CartwrightResult<()> {
            let opts = self.wait.clone();
            self.wait_for_selector_with(selector, &opts).await
        }

        /// Wait for the element to be attached to the DOM
        pub async fn wait_for_selector_with(
            &self,
            selector: &Selector,
            opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            let expr = format!("!!({})", selector.to_query());
            self.poll_js_bool(&expr, opts, &format!("{} to be attached", selector.describe()))
                .await
        }

        /// Sleep for a fixed settle delay.
        ///
        /// Discouraged; only for the storefront's asynchronous rendering
        /// where no element-based condition exists.
        pub async fn wait_for_timeout(&self, ms: u64) {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }

        async fn poll_js_bool(
            &self,
            expr: &str,
            opts: &WaitOptions,
            waiting_for: &str,
        ) -> CartwrightResult<()> {
            let attempts = self.retry.effective_attempts();
            for attempt in 0..attempts {
                let start = Instant::now();
                while start.elapsed() < opts.timeout() {
                    // An evaluation failure mid-poll means "not yet", e.g. a
                    // query against a document that is still being replaced
                    if self.evaluate::<bool>(expr).await.unwrap_or(false) {
                        return Ok(());
                    }
                    tokio::time::sleep(opts.poll_interval()).await;
                }
                if attempt + 1 < attempts {
                    tokio::time::sleep(self.retry.backoff).await;
                }
            }
            Err(CartwrightError::timeout(opts.timeout_ms, waiting_for))
        }

        /// Full page HTML source
        pub async fn content(&self) -> CartwrightResult<String> {
            self.evaluate("document.documentElement.outerHTML").await
        }

        /// Document title
        pub async fn title(&self) -> CartwrightResult<String> {
            self.evaluate("document.title").await
        }

        /// URL of the last explicit navigation
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// The live `window.location.href` (tracks in-page navigation)
        pub async fn location(&self) -> CartwrightResult<String> {
            self.evaluate("window.location.href").await
        }

        /// All cookies visible to this page
        pub async fn cookies(&self) -> CartwrightResult<Vec<CookieRecord>> {
            let inner = self.cdp()?;
            let page = inner.lock().await;
            let cookies = page.get_cookies().await.map_err(|e| CartwrightError::Page {
                message: e.to_string(),
            })?;
            Ok(cookies
                .into_iter()
                .map(|c| CookieRecord {
                    name: c.name,
                    value: c.value,
                    domain: c.domain,
                    path: c.path,
                    http_only: c.http_only,
                    secure: c.secure,
                })
                .collect())
        }

        /// `localStorage` serialized as a JSON string
        pub async fn local_storage(&self) -> CartwrightResult<String> {
            self.evaluate("JSON.stringify(localStorage)").await
        }

        /// `sessionStorage` serialized as a JSON string
        pub async fn session_storage(&self) -> CartwrightResult<String> {
            self.evaluate("JSON.stringify(sessionStorage)").await
        }

        /// Console messages captured since the page was opened
        #[must_use]
        pub fn console_logs(&self) -> Vec<ConsoleMessage> {
            self.console.lock().map(|logs| logs.clone()).unwrap_or_default()
        }

        /// Drop captured console messages
        pub fn clear_console_logs(&self) {
            if let Ok(mut logs) = self.console.lock() {
                logs.clear();
            }
        }

        /// Response headers of the current document (same-origin fetch probe)
        pub async fn response_headers(
            &self,
        ) -> CartwrightResult<HashMap<String, String>> {
            self.evaluate_async(HEADERS_PROBE_JS).await
        }

        /// Take a PNG screenshot
        ///
        /// # Errors
        ///
        /// Returns an error if capture or decoding fails
        pub async fn screenshot(&self) -> CartwrightResult<Vec<u8>> {
            let inner = self.cdp()?;
            let page = inner.lock().await;
            let params = CaptureScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build();

            let screenshot =
                page.execute(params)
                    .await
                    .map_err(|e| CartwrightError::Screenshot {
                        message: e.to_string(),
                    })?;

            use base64::Engine;
            base64::engine::general_purpose::STANDARD
                .decode(&screenshot.data)
                .map_err(|e| CartwrightError::Screenshot {
                    message: e.to_string(),
                })
        }
    }
}

// ============================================================================
// Mock implementation (when `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
mod mock {
    use super::*;
    use std::collections::HashMap;

    fn no_browser<T>() -> CartwrightResult<T> {
        Err(CartwrightError::Eval {
            message: "Browser feature not enabled. Enable 'browser' for real CDP support."
                .to_string(),
        })
    }

    /// Browser instance (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Browser {
        config: SiteConfig,
    }

    impl Browser {
        /// Launch a browser (mock)
        pub async fn launch(config: SiteConfig) -> CartwrightResult<Self> {
            Ok(Self { config })
        }

        /// Open a new page (mock)
        pub async fn new_page(&self) -> CartwrightResult<Page> {
            Ok(Page::new(
                self.config.viewport_width,
                self.config.viewport_height,
            ))
        }

        /// The configuration this browser was launched with
        #[must_use]
        pub const fn config(&self) -> &SiteConfig {
            &self.config
        }

        /// Close the browser (mock)
        pub async fn close(self) -> CartwrightResult<()> {
            Ok(())
        }
    }

    /// A browser page (mock when `browser` feature disabled)
    #[derive(Debug)]
    pub struct Page {
        /// Viewport width
        pub width: u32,
        /// Viewport height
        pub height: u32,
        url: String,
        #[allow(dead_code)]
        wait: WaitOptions,
        #[allow(dead_code)]
        retry: RetryPolicy,
    }

    impl Page {
        /// Create a new mock page
        #[must_use]
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                url: String::from("about:blank"),
                wait: WaitOptions::default(),
                retry: RetryPolicy::default(),
            }
        }

        /// Navigate to a URL (mock records the URL only)
        pub async fn goto(&mut self, url: &str) -> CartwrightResult<()> {
            self.url = url.to_string();
            Ok(())
        }

        /// Wait for a load state (mock returns immediately)
        pub async fn wait_for_load_state(
            &self,
            _state: LoadState,
            _opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            Ok(())
        }

        /// Evaluate JavaScript (mock always errors)
        pub async fn evaluate<T: serde::de::DeserializeOwned>(
            &self,
            _expr: &str,
        ) -> CartwrightResult<T> {
            no_browser()
        }

        /// Evaluate an async JavaScript expression (mock always errors)
        pub async fn evaluate_async<T: serde::de::DeserializeOwned>(
            &self,
            _expr: &str,
        ) -> CartwrightResult<T> {
            no_browser()
        }

        /// Click (mock does nothing)
        pub async fn click(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// DOM-level click dispatch (mock does nothing)
        pub async fn click_js(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Hover (mock does nothing)
        pub async fn hover(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Fill (mock does nothing)
        pub async fn fill(&self, _selector: &Selector, _text: &str) -> CartwrightResult<()> {
            Ok(())
        }

        /// Check (mock does nothing)
        pub async fn check(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Select option (mock does nothing)
        pub async fn select_option(
            &self,
            _selector: &Selector,
            _value: &str,
        ) -> CartwrightResult<()> {
            Ok(())
        }

        /// Scroll into view (mock does nothing)
        pub async fn scroll_into_view(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Inner text (mock always errors)
        pub async fn inner_text(&self, _selector: &Selector) -> CartwrightResult<String> {
            no_browser()
        }

        /// Input value (mock always errors)
        pub async fn input_value(&self, _selector: &Selector) -> CartwrightResult<String> {
            no_browser()
        }

        /// Attribute (mock always errors)
        pub async fn attribute(
            &self,
            _selector: &Selector,
            _name: &str,
        ) -> CartwrightResult<Option<String>> {
            no_browser()
        }

        /// Count (mock always errors)
        pub async fn count(&self, _selector: &Selector) -> CartwrightResult<usize> {
            no_browser()
        }

        /// Visibility (mock always errors)
        pub async fn is_visible(&self, _selector: &Selector) -> CartwrightResult<bool> {
            no_browser()
        }

        /// Wait for visible (mock returns immediately)
        pub async fn wait_for_visible(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Wait for visible with options (mock returns immediately)
        pub async fn wait_for_visible_with(
            &self,
            _selector: &Selector,
            _opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            Ok(())
        }

        /// Wait for hidden (mock returns immediately)
        pub async fn wait_for_hidden(
            &self,
            _selector: &Selector,
            _opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            Ok(())
        }

        /// Wait for attached (mock returns immediately)
        pub async fn wait_for_selector(&self, _selector: &Selector) -> CartwrightResult<()> {
            Ok(())
        }

        /// Wait for attached with options (mock returns immediately)
        pub async fn wait_for_selector_with(
            &self,
            _selector: &Selector,
            _opts: &WaitOptions,
        ) -> CartwrightResult<()> {
            Ok(())
        }

        /// Settle delay (mock returns immediately)
        pub async fn wait_for_timeout(&self, _ms: u64) {}

        /// Page source (mock always errors)
        pub async fn content(&self) -> CartwrightResult<String> {
            no_browser()
        }

        /// Title (mock always errors)
        pub async fn title(&self) -> CartwrightResult<String> {
            no_browser()
        }

        /// URL of the last explicit navigation
        #[must_use]
        pub fn current_url(&self) -> &str {
            &self.url
        }

        /// Live location (mock always errors)
        pub async fn location(&self) -> CartwrightResult<String> {
            no_browser()
        }

        /// Cookies (mock always errors)
        pub async fn cookies(&self) -> CartwrightResult<Vec<CookieRecord>> {
            no_browser()
        }

        /// localStorage dump (mock always errors)
        pub async fn local_storage(&self) -> CartwrightResult<String> {
            no_browser()
        }

        /// sessionStorage dump (mock always errors)
        pub async fn session_storage(&self) -> CartwrightResult<String> {
            no_browser()
        }

        /// Captured console messages (mock is always empty)
        #[must_use]
        pub fn console_logs(&self) -> Vec<ConsoleMessage> {
            Vec::new()
        }

        /// Drop captured console messages (mock does nothing)
        pub fn clear_console_logs(&self) {}

        /// Response headers (mock always errors)
        pub async fn response_headers(
            &self,
        ) -> CartwrightResult<HashMap<String, String>> {
            no_browser()
        }

        /// Screenshot (mock returns empty bytes)
        pub async fn screenshot(&self) -> CartwrightResult<Vec<u8>> {
            Ok(vec![])
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use mock::{Browser, Page};
