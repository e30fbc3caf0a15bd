//! Cartwright: browser-driven test suite for the AutomationExercise storefront.
//!
//! End-to-end, security, and performance checks against the public demo
//! shop at `https://automationexercise.com`, built around a Page Object
//! Model layer that keeps every DOM selector behind one boundary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     CARTWRIGHT Architecture                       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐     ┌─────────────┐     ┌─────────────┐         │
//! │   │ E2E Suites │     │ Page Object │     │ Headless    │         │
//! │   │ (tests/)   │────►│ Layer       │────►│ Browser     │         │
//! │   │            │     │ (src/pages) │     │ (CDP)       │         │
//! │   └────────────┘     └─────────────┘     └─────────────┘         │
//! │          │                                      │                │
//! │          └────────── security / perf ◄──────────┘                │
//! │                      analysis (pure)                             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The site's rendered DOM is the only interface: an unversioned contract
//! of CSS classes and `data-qa` attributes. Real browser control requires
//! the `browser` feature (chromiumoxide over the Chrome DevTools Protocol);
//! without it a mock keeps the library compiling for unit tests.

#![warn(missing_docs)]

/// Browser and page control (CDP behind the `browser` feature, mock otherwise)
pub mod browser;

/// Suite configuration: base URL, timeouts, retry policy
pub mod config;

/// Synthetic fixture data (profiles, payment card, unique emails)
pub mod data;

/// Test harness and tracing setup
pub mod fixture;

/// Selector-to-JavaScript locator layer
pub mod locator;

/// Page objects for the storefront
pub mod pages;

/// Performance timing collection and rating
pub mod perf;

/// Tri-state presence probing
pub mod presence;

/// Result and error types
pub mod result;

/// Leak scanning and security-header analysis
pub mod security;

/// Wait options and load states
pub mod wait;

pub use browser::{Browser, ConsoleMessage, CookieRecord, Page};
pub use config::{RetryPolicy, SiteConfig};
pub use data::{Address, BirthDate, PaymentCard, TestDataFactory, Title, UserProfile};
pub use fixture::{init_tracing, TestHarness};
pub use locator::{Locator, LocatorOptions, Selector};
pub use pages::{
    CartPage, CartProduct, CheckoutPage, LoginPage, PaymentPage, ProductsPage, RegistrationPage,
};
pub use perf::{CoreWebVitals, NavigationTiming, PerfReport, Rating};
pub use presence::Presence;
pub use result::{CartwrightError, CartwrightResult};
pub use security::{Evidence, HeaderReport, Leak, LeakChannel, SensitiveValues};
pub use wait::{LoadState, WaitOptions, Waiter};
