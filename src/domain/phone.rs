//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The kind of phone number a contact stored.
///
/// `Custom` carries a free-form label entered by the user (validated
/// non-empty at `PhoneNumber` construction).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneNumberType {
    Mobile,
    Private,
    Business,
    Custom(String),
}

impl fmt::Display for PhoneNumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Private => write!(f, "private"),
            Self::Business => write!(f, "business"),
            Self::Custom(label) => write!(f, "{}", label),
        }
    }
}

/// A type-safe wrapper for stored phone numbers.
///
/// The value is kept exactly as the user entered it (spaces, dashes,
/// parentheses, a leading `+` are all preserved); format-insensitive
/// comparison happens in the matching layer, not here. Validation at
/// construction time guarantees the value is never empty and always
/// carries at least one digit.
///
/// # Example
///
/// ```
/// use callmatch::domain::{PhoneNumber, PhoneNumberType};
///
/// let phone = PhoneNumber::new("+41 44 123 45 67", PhoneNumberType::Mobile, true).unwrap();
/// assert_eq!(phone.value(), "+41 44 123 45 67");
/// assert!(phone.is_main_number());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber {
    value: String,
    #[serde(rename = "type")]
    number_type: PhoneNumberType,
    #[serde(rename = "isMainNumber")]
    is_main_number: bool,
}

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods, slashes
    /// - Must not be empty
    /// - A `Custom` type must carry a non-empty label
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid,
    /// `ValidationError::EmptyCustomLabel` for a blank custom label.
    pub fn new(
        value: impl Into<String>,
        number_type: PhoneNumberType,
        is_main_number: bool,
    ) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }

        if let PhoneNumberType::Custom(ref label) = number_type {
            if label.trim().is_empty() {
                return Err(ValidationError::EmptyCustomLabel);
            }
        }

        Ok(Self {
            value,
            number_type,
            is_main_number,
        })
    }

    /// Create a mobile, non-main number. Shorthand for the common case.
    pub fn mobile(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(value, PhoneNumberType::Mobile, false)
    }

    /// Validate phone format.
    fn is_valid(value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        // Must contain at least one digit
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        // All characters must be valid phone number characters
        value.chars().all(|c| {
            c.is_ascii_digit()
                || c == ' '
                || c == '-'
                || c == '('
                || c == ')'
                || c == '+'
                || c == '.'
                || c == '/'
        })
    }

    /// Get the phone number exactly as entered.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the stored number type.
    pub fn number_type(&self) -> &PhoneNumberType {
        &self.number_type
    }

    /// Whether the user marked this as the contact's main number.
    pub fn is_main_number(&self) -> bool {
        self.is_main_number
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.value.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - deserialize with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            value: String,
            #[serde(rename = "type")]
            number_type: PhoneNumberType,
            #[serde(rename = "isMainNumber", default)]
            is_main_number: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        PhoneNumber::new(raw.value, raw.number_type, raw.is_main_number)
            .map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
