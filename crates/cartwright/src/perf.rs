//! Page performance measurement and rating.
//!
//! Timings come from the browser's `performance` APIs via in-page probes;
//! the rating bands and ceilings are calibration values tuned against the
//! live storefront to avoid flakiness, not requirements derived from a
//! policy.

use serde::{Deserialize, Serialize};

/// Assertion ceiling for total page load (seconds)
pub const MAX_PAGE_LOAD_SECS: f64 = 5.0;

/// Assertion ceiling for cumulative layout shift.
///
/// Far looser than the "good" band on purpose; the live site's ad slots
/// shift the layout unpredictably.
pub const CLS_CEILING: f64 = 0.5;

/// Assertion ceiling for JS heap growth across a flow (ratio)
pub const MEMORY_GROWTH_CEILING: f64 = 1.5;

/// In-page probe for navigation timing
pub const NAVIGATION_TIMING_JS: &str = "(() => { \
    const timing = performance.timing; \
    const navigation = performance.getEntriesByType('navigation')[0]; \
    return { \
        redirectTime: timing.redirectEnd - timing.redirectStart, \
        dnsTime: timing.domainLookupEnd - timing.domainLookupStart, \
        tcpTime: timing.connectEnd - timing.connectStart, \
        ttfb: timing.responseStart - timing.requestStart, \
        downloadTime: timing.responseEnd - timing.responseStart, \
        domProcessing: timing.domComplete - timing.domLoading, \
        domInteractive: timing.domInteractive - timing.navigationStart, \
        domComplete: timing.domComplete - timing.navigationStart, \
        loadComplete: timing.loadEventEnd - timing.navigationStart, \
        transferSize: navigation ? navigation.transferSize : 0, \
        encodedBodySize: navigation ? navigation.encodedBodySize : 0, \
        decodedBodySize: navigation ? navigation.decodedBodySize : 0 \
    }; })()";

/// In-page probe for paint timing and layout shift
pub const WEB_VITALS_JS: &str = "(() => { \
    const paints = performance.getEntriesByType('paint'); \
    const fcp = paints.find(p => p.name === 'first-contentful-paint'); \
    const lcpEntries = performance.getEntriesByType('largest-contentful-paint'); \
    const lcp = lcpEntries.length ? lcpEntries[lcpEntries.length - 1] : null; \
    let cls = 0; \
    for (const shift of performance.getEntriesByType('layout-shift')) { \
        if (!shift.hadRecentInput) cls += shift.value; \
    } \
    return { \
        fcpMs: fcp ? fcp.startTime : null, \
        lcpMs: lcp ? lcp.startTime : null, \
        cls: cls, \
        ttiMs: performance.timing.domInteractive - performance.timing.navigationStart \
    }; })()";

/// In-page probe for JS heap usage (Chrome-only `performance.memory`)
pub const MEMORY_JS: &str = "(() => performance.memory ? \
    performance.memory.usedJSHeapSize : null)()";

/// Navigation timing breakdown, all values in milliseconds unless noted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTiming {
    /// Redirect time
    pub redirect_time: f64,
    /// DNS lookup time
    pub dns_time: f64,
    /// TCP connection time
    pub tcp_time: f64,
    /// Time to first byte
    pub ttfb: f64,
    /// Response download time
    pub download_time: f64,
    /// DOM processing time
    pub dom_processing: f64,
    /// Navigation start to DOM interactive
    pub dom_interactive: f64,
    /// Navigation start to DOM complete
    pub dom_complete: f64,
    /// Navigation start to load event end
    pub load_complete: f64,
    /// Transfer size (bytes)
    pub transfer_size: f64,
    /// Encoded body size (bytes)
    pub encoded_body_size: f64,
    /// Decoded body size (bytes)
    pub decoded_body_size: f64,
}

/// Core web vitals snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreWebVitals {
    /// First contentful paint (ms); None when the entry is missing
    pub fcp_ms: Option<f64>,
    /// Largest contentful paint (ms); None when the entry is missing
    pub lcp_ms: Option<f64>,
    /// Cumulative layout shift
    pub cls: f64,
    /// Time to interactive approximation (ms)
    pub tti_ms: f64,
}

/// Rating band for a measured value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// Well inside the fast band
    Excellent,
    /// Acceptable
    Good,
    /// Noticeably slow
    Fair,
    /// Needs attention
    Poor,
}

impl Rating {
    /// Rate a time-to-first-byte measurement
    #[must_use]
    pub fn for_ttfb(ms: f64) -> Self {
        match ms {
            ms if ms < 600.0 => Self::Excellent,
            ms if ms < 1_000.0 => Self::Good,
            ms if ms < 1_500.0 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Rate a first-contentful-paint measurement
    #[must_use]
    pub fn for_fcp(ms: f64) -> Self {
        match ms {
            ms if ms < 1_000.0 => Self::Excellent,
            ms if ms < 1_800.0 => Self::Good,
            ms if ms < 3_000.0 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Rate a largest-contentful-paint measurement
    #[must_use]
    pub fn for_lcp(ms: f64) -> Self {
        match ms {
            ms if ms < 1_200.0 => Self::Excellent,
            ms if ms < 2_500.0 => Self::Good,
            ms if ms < 4_000.0 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Rate a cumulative-layout-shift measurement
    #[must_use]
    pub fn for_cls(cls: f64) -> Self {
        match cls {
            cls if cls < 0.1 => Self::Excellent,
            cls if cls < 0.25 => Self::Good,
            cls if cls < CLS_CEILING => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Whether the band is acceptable for assertion purposes
    #[must_use]
    pub const fn is_acceptable(&self) -> bool {
        !matches!(self, Self::Poor)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        };
        write!(f, "{name}")
    }
}

/// Aggregated performance report for one page load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfReport {
    /// Wall-clock load time measured by the test (ms)
    pub load_time_ms: f64,
    /// Navigation timing breakdown
    pub timing: NavigationTiming,
    /// Web vitals snapshot
    pub vitals: CoreWebVitals,
}

impl PerfReport {
    /// TTFB rating
    #[must_use]
    pub fn ttfb_rating(&self) -> Rating {
        Rating::for_ttfb(self.timing.ttfb)
    }

    /// CLS rating
    #[must_use]
    pub fn cls_rating(&self) -> Rating {
        Rating::for_cls(self.vitals.cls)
    }

    /// Whether the load clears the assertion ceilings
    #[must_use]
    pub fn passes(&self) -> bool {
        self.load_time_ms < MAX_PAGE_LOAD_SECS * 1_000.0 && self.vitals.cls < CLS_CEILING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(ttfb: f64) -> NavigationTiming {
        NavigationTiming {
            redirect_time: 0.0,
            dns_time: 12.0,
            tcp_time: 30.0,
            ttfb,
            download_time: 80.0,
            dom_processing: 400.0,
            dom_interactive: 900.0,
            dom_complete: 1_600.0,
            load_complete: 1_900.0,
            transfer_size: 250_000.0,
            encoded_body_size: 240_000.0,
            decoded_body_size: 800_000.0,
        }
    }

    fn vitals(cls: f64) -> CoreWebVitals {
        CoreWebVitals {
            fcp_ms: Some(850.0),
            lcp_ms: Some(1_900.0),
            cls,
            tti_ms: 900.0,
        }
    }

    mod rating_tests {
        use super::*;

        #[test]
        fn test_ttfb_bands() {
            assert_eq!(Rating::for_ttfb(250.0), Rating::Excellent);
            assert_eq!(Rating::for_ttfb(800.0), Rating::Good);
            assert_eq!(Rating::for_ttfb(1_200.0), Rating::Fair);
            assert_eq!(Rating::for_ttfb(2_000.0), Rating::Poor);
        }

        #[test]
        fn test_band_edges_fall_into_the_slower_band() {
            assert_eq!(Rating::for_ttfb(600.0), Rating::Good);
            assert_eq!(Rating::for_lcp(2_500.0), Rating::Fair);
            assert_eq!(Rating::for_cls(0.25), Rating::Fair);
        }

        #[test]
        fn test_cls_ceiling_is_poor() {
            assert_eq!(Rating::for_cls(CLS_CEILING), Rating::Poor);
        }

        #[test]
        fn test_acceptability() {
            assert!(Rating::Excellent.is_acceptable());
            assert!(Rating::Fair.is_acceptable());
            assert!(!Rating::Poor.is_acceptable());
        }
    }

    mod report_tests {
        use super::*;

        #[test]
        fn test_fast_load_passes() {
            let report = PerfReport {
                load_time_ms: 2_300.0,
                timing: timing(400.0),
                vitals: vitals(0.08),
            };
            assert!(report.passes());
            assert_eq!(report.ttfb_rating(), Rating::Excellent);
            assert_eq!(report.cls_rating(), Rating::Excellent);
        }

        #[test]
        fn test_slow_load_fails_the_ceiling() {
            let report = PerfReport {
                load_time_ms: 6_200.0,
                timing: timing(400.0),
                vitals: vitals(0.08),
            };
            assert!(!report.passes());
        }

        #[test]
        fn test_jumpy_layout_fails_the_ceiling() {
            let report = PerfReport {
                load_time_ms: 2_000.0,
                timing: timing(400.0),
                vitals: vitals(0.6),
            };
            assert!(!report.passes());
        }
    }

    mod probe_tests {
        use super::*;

        #[test]
        fn test_navigation_probe_deserializes() {
            // Shape check against the probe's camelCase payload
            let payload = r#"{
                "redirectTime": 0, "dnsTime": 10, "tcpTime": 20, "ttfb": 300,
                "downloadTime": 50, "domProcessing": 400, "domInteractive": 800,
                "domComplete": 1500, "loadComplete": 1800,
                "transferSize": 1024, "encodedBodySize": 900, "decodedBodySize": 4096
            }"#;
            let timing: NavigationTiming = serde_json::from_str(payload).unwrap();
            assert_eq!(timing.ttfb, 300.0);
            assert_eq!(timing.load_complete, 1_800.0);
        }

        #[test]
        fn test_vitals_probe_deserializes_with_missing_entries() {
            let payload = r#"{ "fcpMs": null, "lcpMs": null, "cls": 0.02, "ttiMs": 750 }"#;
            let vitals: CoreWebVitals = serde_json::from_str(payload).unwrap();
            assert!(vitals.fcp_ms.is_none());
            assert_eq!(vitals.cls, 0.02);
        }

        #[test]
        fn test_probes_query_the_performance_api() {
            assert!(NAVIGATION_TIMING_JS.contains("performance.timing"));
            assert!(WEB_VITALS_JS.contains("layout-shift"));
            assert!(MEMORY_JS.contains("usedJSHeapSize"));
        }
    }
}
