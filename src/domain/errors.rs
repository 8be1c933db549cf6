//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// A custom phone number type was given an empty label.
    EmptyCustomLabel,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::EmptyCustomLabel => write!(f, "Custom phone type label cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}
