//! Security analysis over browser-collected evidence.
//!
//! Two concerns live here: scanning everything the browser exposes for
//! leaked secrets (page source, web storage, cookies, console, URLs), and
//! scoring the main document's HTTP security headers. Both are pure
//! functions over collected data so they are testable without a browser;
//! the e2e suites feed them live evidence.
//!
//! Header scoring asserts on a threshold rather than individual findings:
//! client-side observation is one layer of defense, and server behavior is
//! outside this suite's observability.

use crate::browser::{ConsoleMessage, CookieRecord};
use crate::data::{PaymentCard, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Secrets shorter than this are skipped to avoid false positives
/// (a three-digit CVC matches too much unrelated text)
pub const MIN_SECRET_LEN: usize = 6;

/// Console noise that is not application output
const CONSOLE_NOISE: [&str; 4] = ["autocomplete", "[dom]", "suggested:", "violation"];

/// Channels a secret can leak through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeakChannel {
    /// Rendered page HTML
    PageSource,
    /// `localStorage`
    LocalStorage,
    /// `sessionStorage`
    SessionStorage,
    /// Cookie values
    Cookies,
    /// Console messages
    Console,
    /// A navigated or requested URL
    Url,
}

impl std::fmt::Display for LeakChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PageSource => "page source",
            Self::LocalStorage => "localStorage",
            Self::SessionStorage => "sessionStorage",
            Self::Cookies => "cookies",
            Self::Console => "console",
            Self::Url => "URL",
        };
        write!(f, "{name}")
    }
}

/// A detected secret exposure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leak {
    /// Where the secret surfaced
    pub channel: LeakChannel,
    /// Which secret (by label, never the value)
    pub label: String,
    /// Prefix-redacted form for diagnostics
    pub redacted: String,
}

impl std::fmt::Display for Leak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} leaked in {}: {}", self.label, self.channel, self.redacted)
    }
}

/// The set of secrets a flow must never expose
#[derive(Debug, Clone, Default)]
pub struct SensitiveValues {
    values: Vec<(String, String)>,
}

impl SensitiveValues {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labelled secret; values below [`MIN_SECRET_LEN`] are ignored
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.len() >= MIN_SECRET_LEN {
            self.values.push((label.into(), value));
        }
    }

    /// The secrets a registration + payment flow handles
    #[must_use]
    pub fn for_flow(profile: &UserProfile, card: &PaymentCard) -> Self {
        let mut values = Self::new();
        values.push("password", &profile.password);
        values.push("card number", &card.card_number);
        values.push("cvc", &card.cvc);
        values.push("mobile number", &profile.address.mobile);
        values
    }

    /// Number of secrets being tracked
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no secrets are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn redact(value: &str) -> String {
        let prefix: String = value.chars().take(4).collect();
        format!("{prefix}***")
    }

    /// Scan a text blob for any tracked secret
    #[must_use]
    pub fn scan_text(&self, channel: LeakChannel, text: &str) -> Vec<Leak> {
        self.values
            .iter()
            .filter(|(_, value)| text.contains(value.as_str()))
            .map(|(label, value)| Leak {
                channel,
                label: label.clone(),
                redacted: Self::redact(value),
            })
            .collect()
    }

    /// Scan cookie values
    #[must_use]
    pub fn scan_cookies(&self, cookies: &[CookieRecord]) -> Vec<Leak> {
        let jar = cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ");
        self.scan_text(LeakChannel::Cookies, &jar)
    }

    /// Scan console messages, skipping browser chatter
    #[must_use]
    pub fn scan_console(&self, logs: &[ConsoleMessage]) -> Vec<Leak> {
        let mut leaks = Vec::new();
        for log in logs {
            let lowered = log.text.to_lowercase();
            if CONSOLE_NOISE.iter().any(|noise| lowered.contains(noise)) {
                continue;
            }
            leaks.extend(self.scan_text(LeakChannel::Console, &log.text));
        }
        leaks.sort_by(|a, b| a.label.cmp(&b.label));
        leaks.dedup();
        leaks
    }

    /// Scan a URL, also flagging `password=` query parameters
    #[must_use]
    pub fn scan_url(&self, url: &str) -> Vec<Leak> {
        let mut leaks = self.scan_text(LeakChannel::Url, url);
        if url.to_lowercase().contains("password=") {
            leaks.push(Leak {
                channel: LeakChannel::Url,
                label: "password query parameter".to_string(),
                redacted: "password=***".to_string(),
            });
        }
        leaks
    }
}

/// Evidence gathered from a page after a sensitive flow
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    /// Page HTML source
    pub page_source: String,
    /// `localStorage` dump (JSON)
    pub local_storage: String,
    /// `sessionStorage` dump (JSON)
    pub session_storage: String,
    /// Cookies
    pub cookies: Vec<CookieRecord>,
    /// Console messages
    pub console: Vec<ConsoleMessage>,
    /// URLs the flow navigated through
    pub urls: Vec<String>,
}

impl Evidence {
    /// Scan every channel for the given secrets
    #[must_use]
    pub fn scan(&self, values: &SensitiveValues) -> Vec<Leak> {
        let mut leaks = Vec::new();
        leaks.extend(values.scan_text(LeakChannel::PageSource, &self.page_source));
        leaks.extend(values.scan_text(LeakChannel::LocalStorage, &self.local_storage));
        leaks.extend(values.scan_text(LeakChannel::SessionStorage, &self.session_storage));
        leaks.extend(values.scan_cookies(&self.cookies));
        leaks.extend(values.scan_console(&self.console));
        for url in &self.urls {
            leaks.extend(values.scan_url(url));
        }
        leaks
    }
}

/// Collect leak-scan evidence from a live page
pub async fn collect_evidence(
    page: &crate::browser::Page,
) -> crate::result::CartwrightResult<Evidence> {
    let mut urls = vec![page.current_url().to_string()];
    if let Ok(href) = page.location().await {
        if !urls.contains(&href) {
            urls.push(href);
        }
    }
    Ok(Evidence {
        page_source: page.content().await?,
        local_storage: page.local_storage().await?,
        session_storage: page.session_storage().await?,
        cookies: page.cookies().await?,
        console: page.console_logs(),
        urls,
    })
}

// ============================================================================
// HTTP security headers
// ============================================================================

/// Maximum achievable header score
pub const MAX_HEADER_SCORE: f32 = 8.0;

/// Default minimum score the live storefront is held to.
///
/// Calibrated against the site's observed posture, not derived from a
/// policy; revisit rather than inherit.
pub const MIN_HEADER_SCORE: f32 = 2.0;

/// Verdict on a single header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStatus {
    /// Present with a secure value
    Secure,
    /// Present but weakened (e.g. CSP with unsafe-inline)
    Weak,
    /// Not sent at all
    Missing,
}

/// One analyzed header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderFinding {
    /// Header name (lowercase)
    pub header: String,
    /// Verdict
    pub status: HeaderStatus,
    /// Observed value or advice
    pub detail: String,
    /// Points this finding contributed
    pub points: f32,
}

/// Scored analysis of a response's security headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderReport {
    /// Total score
    pub score: f32,
    /// Maximum achievable score
    pub max_score: f32,
    /// Per-header findings
    pub findings: Vec<HeaderFinding>,
}

impl HeaderReport {
    /// Analyze a header map (keys are matched case-insensitively)
    #[must_use]
    pub fn analyze(headers: &HashMap<String, String>) -> Self {
        let lowered: HashMap<String, String> = headers
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();
        let get = |name: &str| lowered.get(name).map(String::as_str).unwrap_or("");

        let mut findings = Vec::new();
        let mut score = 0.0_f32;

        // Clickjacking protection
        let x_frame = get("x-frame-options").to_uppercase();
        findings.push(if matches!(x_frame.as_str(), "DENY" | "SAMEORIGIN") {
            score += 1.0;
            HeaderFinding {
                header: "x-frame-options".to_string(),
                status: HeaderStatus::Secure,
                detail: x_frame,
                points: 1.0,
            }
        } else {
            HeaderFinding {
                header: "x-frame-options".to_string(),
                status: HeaderStatus::Missing,
                detail: "set to DENY or SAMEORIGIN".to_string(),
                points: 0.0,
            }
        });

        // MIME sniffing protection
        let x_content_type = get("x-content-type-options").to_lowercase();
        findings.push(if x_content_type == "nosniff" {
            score += 1.0;
            HeaderFinding {
                header: "x-content-type-options".to_string(),
                status: HeaderStatus::Secure,
                detail: "nosniff".to_string(),
                points: 1.0,
            }
        } else {
            HeaderFinding {
                header: "x-content-type-options".to_string(),
                status: HeaderStatus::Missing,
                detail: "set to nosniff".to_string(),
                points: 0.0,
            }
        });

        // Legacy XSS filter; CSP supersedes it, so it only earns half a point
        let x_xss = get("x-xss-protection");
        findings.push(if x_xss.is_empty() {
            HeaderFinding {
                header: "x-xss-protection".to_string(),
                status: HeaderStatus::Missing,
                detail: "legacy header, CSP preferred".to_string(),
                points: 0.0,
            }
        } else {
            score += 0.5;
            HeaderFinding {
                header: "x-xss-protection".to_string(),
                status: HeaderStatus::Secure,
                detail: x_xss.to_string(),
                points: 0.5,
            }
        });

        // Content Security Policy carries the most weight
        let csp = get("content-security-policy");
        findings.push(if csp.is_empty() {
            HeaderFinding {
                header: "content-security-policy".to_string(),
                status: HeaderStatus::Missing,
                detail: "implement a strict CSP".to_string(),
                points: 0.0,
            }
        } else if csp.contains("unsafe-inline") || csp.contains("unsafe-eval") {
            score += 1.0;
            HeaderFinding {
                header: "content-security-policy".to_string(),
                status: HeaderStatus::Weak,
                detail: "present but allows unsafe-inline/unsafe-eval".to_string(),
                points: 1.0,
            }
        } else {
            score += 2.0;
            HeaderFinding {
                header: "content-security-policy".to_string(),
                status: HeaderStatus::Secure,
                detail: "present".to_string(),
                points: 2.0,
            }
        });

        // HSTS
        let hsts = get("strict-transport-security");
        findings.push(if hsts.is_empty() {
            HeaderFinding {
                header: "strict-transport-security".to_string(),
                status: HeaderStatus::Missing,
                detail: "enable HSTS".to_string(),
                points: 0.0,
            }
        } else {
            score += 1.5;
            HeaderFinding {
                header: "strict-transport-security".to_string(),
                status: HeaderStatus::Secure,
                detail: hsts.to_string(),
                points: 1.5,
            }
        });

        // Referrer policy
        let referrer = get("referrer-policy");
        findings.push(if referrer.is_empty() {
            HeaderFinding {
                header: "referrer-policy".to_string(),
                status: HeaderStatus::Missing,
                detail: "set a referrer policy".to_string(),
                points: 0.0,
            }
        } else {
            score += 1.0;
            HeaderFinding {
                header: "referrer-policy".to_string(),
                status: HeaderStatus::Secure,
                detail: referrer.to_string(),
                points: 1.0,
            }
        });

        // Permissions policy
        let permissions = get("permissions-policy");
        findings.push(if permissions.is_empty() {
            HeaderFinding {
                header: "permissions-policy".to_string(),
                status: HeaderStatus::Missing,
                detail: "restrict powerful features".to_string(),
                points: 0.0,
            }
        } else {
            score += 1.0;
            HeaderFinding {
                header: "permissions-policy".to_string(),
                status: HeaderStatus::Secure,
                detail: permissions.to_string(),
                points: 1.0,
            }
        });

        Self {
            score,
            max_score: MAX_HEADER_SCORE,
            findings,
        }
    }

    /// Whether the score clears a minimum threshold
    #[must_use]
    pub fn passes(&self, minimum: f32) -> bool {
        self.score >= minimum
    }

    /// Findings for headers that are missing outright
    #[must_use]
    pub fn missing(&self) -> Vec<&HeaderFinding> {
        self.findings
            .iter()
            .filter(|f| f.status == HeaderStatus::Missing)
            .collect()
    }
}
