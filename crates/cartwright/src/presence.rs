//! Tri-state outcome for UI elements that may legitimately be absent.
//!
//! The cookie banner and the order-confirmation message are not guaranteed
//! to appear, so "not there" is normal variation rather than a failure. A
//! bare boolean (or a swallowed exception) cannot distinguish that case
//! from a wait that died for another reason; [`Presence`] keeps the three
//! outcomes apart so call sites can decide what each one means.

use serde::{Deserialize, Serialize};

/// Outcome of probing for an element that may or may not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// The element appeared and was handled
    Present,
    /// The element never appeared within the probe window
    Absent,
    /// The element appeared but interacting with it failed, or the probe
    /// itself broke before a verdict was reached
    TimedOut,
}

impl Presence {
    /// True only when the element was actually found
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    /// True when the probe reached a clean verdict (present or absent)
    #[must_use]
    pub const fn is_conclusive(&self) -> bool {
        !matches!(self, Self::TimedOut)
    }

    /// Collapse to a boolean, mapping an inconclusive probe to `default`
    #[must_use]
    pub const fn found_or(&self, default: bool) -> bool {
        match self {
            Self::Present => true,
            Self::Absent => false,
            Self::TimedOut => default,
        }
    }
}

impl From<Presence> for bool {
    fn from(presence: Presence) -> Self {
        presence.is_present()
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::TimedOut => "timed out",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_present() {
        assert!(Presence::Present.is_present());
        assert!(!Presence::Absent.is_present());
        assert!(!Presence::TimedOut.is_present());
    }

    #[test]
    fn test_conclusive() {
        assert!(Presence::Present.is_conclusive());
        assert!(Presence::Absent.is_conclusive());
        assert!(!Presence::TimedOut.is_conclusive());
    }

    #[test]
    fn test_found_or_only_affects_timed_out() {
        assert!(Presence::Present.found_or(false));
        assert!(!Presence::Absent.found_or(true));
        assert!(Presence::TimedOut.found_or(true));
        assert!(!Presence::TimedOut.found_or(false));
    }

    #[test]
    fn test_bool_conversion() {
        assert!(bool::from(Presence::Present));
        assert!(!bool::from(Presence::TimedOut));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Presence::TimedOut).unwrap();
        assert_eq!(json, "\"timed_out\"");
        let back: Presence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Presence::TimedOut);
    }
}
