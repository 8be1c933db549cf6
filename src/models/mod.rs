//! Data models for incoming-call matching.

pub mod contact;

pub use contact::ContactWithPhoneNumbers;
