//! Lebanese phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input contains no digits at all.
    #[error("phone number cannot be empty")]
    Empty,
    /// Fewer significant digits than a Lebanese subscriber number.
    #[error("phone number must have at least {min} digits")]
    TooShort {
        /// Minimum number of significant digits.
        min: usize,
    },
}

/// A phone number in canonical `+961` form.
///
/// The storefront delivers in a single region, so numbers are stored and
/// compared canonically regardless of how they were dialed or pasted:
///
/// - every non-digit character is stripped
/// - a leading `961` country prefix is dropped
/// - the remaining digits must number at least 8
/// - the canonical form is `+961` followed by those digits
///
/// A leading trunk `0` is part of the subscriber digits and is kept.
///
/// ## Examples
///
/// ```
/// use delights_core::Phone;
///
/// assert_eq!(Phone::parse("03 123 456").unwrap().as_str(), "+96103123456");
/// assert_eq!(Phone::parse("+961 71 234 567").unwrap().as_str(), "+96171234567");
/// assert!(Phone::parse("123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of significant digits after stripping the prefix.
    pub const MIN_DIGITS: usize = 8;

    /// Country calling code for Lebanon.
    pub const COUNTRY_PREFIX: &'static str = "961";

    /// Parse a `Phone` from free-form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains no digits, or fewer than
    /// 8 digits once a leading `961` prefix is removed.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(PhoneError::Empty);
        }

        let local = digits
            .strip_prefix(Self::COUNTRY_PREFIX)
            .unwrap_or(&digits);

        if local.len() < Self::MIN_DIGITS {
            return Err(PhoneError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        Ok(Self(format!("+{}{local}", Self::COUNTRY_PREFIX)))
    }

    /// Returns the canonical phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
