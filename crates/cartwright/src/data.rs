//! Synthetic fixture data.
//!
//! Registration runs against a shared live site, so every profile carries a
//! freshly generated, collision-resistant email. Card data is synthetic and
//! non-functional; the storefront accepts anything shaped like a card.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed local-part prefix for generated emails
pub const EMAIL_PREFIX: &str = "testuser";

/// Fixed domain for generated emails
pub const EMAIL_DOMAIN: &str = "example.com";

/// Salutation selected on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Title {
    /// Mr. (first gender radio)
    Mr,
    /// Mrs. (second gender radio)
    Mrs,
}

/// Date of birth as the registration dropdowns' option values.
///
/// Month is a `1`-`12` string; no validation happens here, so values must
/// match the underlying `<select>` options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    /// Day of month (`"1"`-`"31"`)
    pub day: String,
    /// Month (`"1"`-`"12"`)
    pub month: String,
    /// Four-digit year
    pub year: String,
}

impl BirthDate {
    /// Create a birth date from option values
    #[must_use]
    pub fn new(day: &str, month: &str, year: &str) -> Self {
        Self {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }
}

/// The nine address fields of the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Company
    pub company: String,
    /// Address line 1
    pub address1: String,
    /// Address line 2
    pub address2: String,
    /// Country (must match a `#country` dropdown option)
    pub country: String,
    /// State or region (free text)
    pub state: String,
    /// City
    pub city: String,
    /// Postal code
    pub zipcode: String,
    /// Mobile number
    pub mobile: String,
}

/// A complete registration profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name used on the signup form
    pub name: String,
    /// Unique email for this run
    pub email: String,
    /// Salutation
    pub title: Title,
    /// Account password
    pub password: String,
    /// Date of birth
    pub dob: BirthDate,
    /// Address record
    pub address: Address,
}

/// A synthetic payment card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    /// Cardholder name
    pub name_on_card: String,
    /// Card number
    pub card_number: String,
    /// Card verification code
    pub cvc: String,
    /// Expiry month (`"1"`-`"12"`)
    pub expiry_month: String,
    /// Four-digit expiry year
    pub expiry_year: String,
}

/// Factory for synthetic, collision-resistant fixture data
#[derive(Debug, Clone, Copy, Default)]
pub struct TestDataFactory;

impl TestDataFactory {
    /// Generate a unique email (`testuser_xxxxxxxx@example.com`).
    ///
    /// The 8-character lowercase suffix keeps repeated runs from tripping
    /// the storefront's "email already registered" rejection.
    #[must_use]
    pub fn unique_email() -> String {
        let suffix: String = Uuid::new_v4().simple().to_string().chars().take(8).collect();
        format!("{EMAIL_PREFIX}_{suffix}@{EMAIL_DOMAIN}")
    }

    /// USA profile (the John Smith / Broadway Avenue scenario)
    #[must_use]
    pub fn usa() -> UserProfile {
        UserProfile {
            name: "John Smith".to_string(),
            email: Self::unique_email(),
            title: Title::Mr,
            password: "USA@2024".to_string(),
            dob: BirthDate::new("25", "7", "1985"),
            address: Address {
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
                company: "Smith & Associates LLC".to_string(),
                address1: "1234 Broadway Avenue".to_string(),
                address2: "Suite 500".to_string(),
                country: "United States".to_string(),
                state: "New York".to_string(),
                city: "New York".to_string(),
                zipcode: "10001".to_string(),
                mobile: "2125551234".to_string(),
            },
        }
    }

    /// Canada profile
    #[must_use]
    pub fn canada() -> UserProfile {
        UserProfile {
            name: "Sarah Johnson".to_string(),
            email: Self::unique_email(),
            title: Title::Mrs,
            password: "Canada@2024".to_string(),
            dob: BirthDate::new("22", "9", "1988"),
            address: Address {
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                company: "Maple Tech Inc".to_string(),
                address1: "456 King Street".to_string(),
                address2: "Unit 12".to_string(),
                country: "Canada".to_string(),
                state: "Ontario".to_string(),
                city: "Toronto".to_string(),
                zipcode: "M5H 1A1".to_string(),
                mobile: "4165551234".to_string(),
            },
        }
    }

    /// Australia profile
    #[must_use]
    pub fn australia() -> UserProfile {
        UserProfile {
            name: "Oliver Harris".to_string(),
            email: Self::unique_email(),
            title: Title::Mr,
            password: "Aussie@2024".to_string(),
            dob: BirthDate::new("5", "3", "1990"),
            address: Address {
                first_name: "Oliver".to_string(),
                last_name: "Harris".to_string(),
                company: "Harbour Digital Pty Ltd".to_string(),
                address1: "456 George Street".to_string(),
                address2: "Level 8".to_string(),
                country: "Australia".to_string(),
                state: "New South Wales".to_string(),
                city: "Sydney".to_string(),
                zipcode: "2000".to_string(),
                mobile: "0412345678".to_string(),
            },
        }
    }

    /// New Zealand profile
    #[must_use]
    pub fn new_zealand() -> UserProfile {
        UserProfile {
            name: "Sophie Anderson".to_string(),
            email: Self::unique_email(),
            title: Title::Mrs,
            password: "Kiwi@2024".to_string(),
            dob: BirthDate::new("22", "11", "1994"),
            address: Address {
                first_name: "Sophie".to_string(),
                last_name: "Anderson".to_string(),
                company: "Kiwi Innovation Ltd".to_string(),
                address1: "234 Queen Street".to_string(),
                address2: "Floor 6".to_string(),
                country: "New Zealand".to_string(),
                state: "Auckland Region".to_string(),
                city: "Auckland".to_string(),
                zipcode: "1010".to_string(),
                mobile: "0211234567".to_string(),
            },
        }
    }

    /// Singapore profile
    #[must_use]
    pub fn singapore() -> UserProfile {
        UserProfile {
            name: "Wei Tan".to_string(),
            email: Self::unique_email(),
            title: Title::Mr,
            password: "SG@2024".to_string(),
            dob: BirthDate::new("8", "2", "1989"),
            address: Address {
                first_name: "Wei".to_string(),
                last_name: "Tan".to_string(),
                company: "Lion City Tech Pte Ltd".to_string(),
                address1: "1 Raffles Place".to_string(),
                address2: "#30-01".to_string(),
                country: "Singapore".to_string(),
                state: "Singapore".to_string(),
                city: "Singapore".to_string(),
                zipcode: "048616".to_string(),
                mobile: "91234567".to_string(),
            },
        }
    }

    /// All country profiles the suite registers
    #[must_use]
    pub fn all_countries() -> Vec<UserProfile> {
        vec![
            Self::usa(),
            Self::canada(),
            Self::australia(),
            Self::new_zealand(),
            Self::singapore(),
        ]
    }

    /// The fixed synthetic (non-functional) card profile
    #[must_use]
    pub fn payment() -> PaymentCard {
        PaymentCard {
            name_on_card: "Test User".to_string(),
            card_number: "4532015112830366".to_string(),
            cvc: "871".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "2027".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod email_tests {
        use super::*;

        #[test]
        fn test_email_shape() {
            let email = TestDataFactory::unique_email();
            assert!(email.starts_with("testuser_"));
            assert!(email.ends_with("@example.com"));
            let suffix = email
                .strip_prefix("testuser_")
                .and_then(|rest| rest.strip_suffix("@example.com"))
                .unwrap();
            assert_eq!(suffix.len(), 8);
        }

        #[test]
        fn test_emails_are_unique_across_calls() {
            let a = TestDataFactory::unique_email();
            let b = TestDataFactory::unique_email();
            assert_ne!(a, b);
        }

        proptest! {
            #[test]
            fn prop_suffix_is_lowercase_alphanumeric(_seed in 0u8..8) {
                let email = TestDataFactory::unique_email();
                let suffix = email
                    .strip_prefix("testuser_")
                    .and_then(|rest| rest.strip_suffix("@example.com"))
                    .unwrap();
                prop_assert!(suffix
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
            }
        }
    }

    mod profile_tests {
        use super::*;

        #[test]
        fn test_usa_matches_the_broadway_scenario() {
            let profile = TestDataFactory::usa();
            assert_eq!(profile.name, "John Smith");
            assert_eq!(profile.address.address1, "1234 Broadway Avenue");
            assert_eq!(profile.address.city, "New York");
            assert_eq!(profile.address.zipcode, "10001");
            assert_eq!(profile.address.mobile, "2125551234");
        }

        #[test]
        fn test_all_countries_covers_the_supported_set() {
            let countries: Vec<String> = TestDataFactory::all_countries()
                .into_iter()
                .map(|p| p.address.country)
                .collect();
            assert_eq!(
                countries,
                vec![
                    "United States",
                    "Canada",
                    "Australia",
                    "New Zealand",
                    "Singapore"
                ]
            );
        }

        #[test]
        fn test_each_profile_gets_a_fresh_email() {
            let first = TestDataFactory::canada();
            let second = TestDataFactory::canada();
            assert_ne!(first.email, second.email);
            // Everything except the email is a fixed template
            assert_eq!(first.address, second.address);
            assert_eq!(first.password, second.password);
        }

        #[test]
        fn test_dob_values_match_dropdown_options() {
            for profile in TestDataFactory::all_countries() {
                let month: u8 = profile.dob.month.parse().unwrap();
                assert!((1..=12).contains(&month));
                let day: u8 = profile.dob.day.parse().unwrap();
                assert!((1..=31).contains(&day));
                assert_eq!(profile.dob.year.len(), 4);
            }
        }
    }

    mod payment_tests {
        use super::*;

        #[test]
        fn test_payment_card_is_the_fixed_synthetic_profile() {
            let card = TestDataFactory::payment();
            assert_eq!(card.name_on_card, "Test User");
            assert_eq!(card.card_number, "4532015112830366");
            assert_eq!(card.cvc, "871");
            assert_eq!(card.expiry_month, "12");
            assert_eq!(card.expiry_year, "2027");
        }

        #[test]
        fn test_serde_round_trip() {
            let card = TestDataFactory::payment();
            let json = serde_json::to_string(&card).unwrap();
            let back: PaymentCard = serde_json::from_str(&json).unwrap();
            assert_eq!(card, back);
        }
    }
}
