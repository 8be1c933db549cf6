use crate::error::LookupResult;
use crate::models::ContactWithPhoneNumbers;
use async_trait::async_trait;

/// Contact lookup abstraction consumed by the incoming-call matcher.
///
/// Implemented by the surrounding application over whatever store it
/// keeps contacts in; the matcher receives it by explicit constructor
/// injection, which keeps it testable without a service locator. The
/// provider only needs to understand raw substring/suffix matching —
/// phone-number formatting is entirely the matcher's concern.
#[async_trait]
pub trait ContactLookupProvider: Send + Sync {
    /// Return every contact with at least one stored number ending in `suffix`.
    ///
    /// The suffix is a plain digit string (never formatted). Result order
    /// is the provider's choice; the matcher imposes its own ordering.
    async fn find_contacts_with_number_ending_on(
        &self,
        suffix: &str,
    ) -> LookupResult<Vec<ContactWithPhoneNumbers>>;
}
