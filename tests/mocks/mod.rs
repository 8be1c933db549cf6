pub mod mock_contact_provider;

pub use mock_contact_provider::{sample_contact, MockContactProvider};
