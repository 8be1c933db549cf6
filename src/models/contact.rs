//! Read-only contact projection used during incoming-call matching.

use crate::domain::{ContactId, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact together with all of its stored phone numbers.
///
/// This is a read-only projection built by the lookup provider for one
/// matching pass; it is not the canonical contact aggregate. Candidates
/// are constructed fresh per incoming-call event and discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactWithPhoneNumbers {
    /// Opaque identity from the backing store
    pub id: ContactId,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_name: Option<String>,

    /// Nickname, used for display when no first/last name is stored
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nickname: Option<String>,

    /// Stored phone numbers, in the order the user keeps them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl ContactWithPhoneNumbers {
    /// Create a projection with no names and no numbers.
    pub fn new(id: ContactId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            nickname: None,
            phone_numbers: Vec::new(),
        }
    }

    /// The name shown on the call screen.
    ///
    /// Derived as "first last" when both are present, a single name when
    /// only one is, the nickname otherwise, and empty as the last resort.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.nickname.clone().unwrap_or_default(),
        }
    }

    /// Whether any stored number ends in the given digit suffix.
    ///
    /// Comparison runs over the digit-only form of each stored number, so
    /// formatting characters in the stored value never defeat the match.
    pub fn has_number_ending_on(&self, suffix: &str) -> bool {
        self.phone_numbers
            .iter()
            .any(|phone| phone.digits_only().ends_with(suffix))
    }
}
