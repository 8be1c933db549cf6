//! Service layer orchestrating lookups per incoming-call event.

pub mod call_service;

pub use call_service::{CallLookupService, CallLookupServiceImpl};
