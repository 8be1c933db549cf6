use async_trait::async_trait;
use callmatch::domain::{ContactId, PhoneNumber, PhoneNumberType};
use callmatch::error::{LookupError, LookupResult};
use callmatch::models::ContactWithPhoneNumbers;
use callmatch::repositories::ContactLookupProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact lookup provider for testing.
///
/// Provides an in-memory implementation of ContactLookupProvider that can
/// be configured with test data, tracks the suffixes it was queried with,
/// and can be switched into a failing mode.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactProvider {
    contacts: Arc<Mutex<HashMap<String, ContactWithPhoneNumbers>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    seen_suffixes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactProvider {
    /// Create a new empty MockContactProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the mock provider.
    pub fn add_contact(&self, contact: ContactWithPhoneNumbers) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.as_str().to_string(), contact);
    }

    /// Add multiple contacts to the mock provider.
    pub fn add_contacts(&self, contacts_list: Vec<ContactWithPhoneNumbers>) {
        let mut contacts = self.contacts.lock().unwrap();
        for contact in contacts_list {
            contacts.insert(contact.id.as_str().to_string(), contact);
        }
    }

    /// Switch the provider into a failing mode; every query returns
    /// `LookupError::StoreUnavailable` with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// The suffixes this provider was queried with, in order.
    pub fn seen_suffixes(&self) -> Vec<String> {
        self.seen_suffixes.lock().unwrap().clone()
    }

    /// Clear all contacts from the provider.
    pub fn clear(&self) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactLookupProvider for MockContactProvider {
    async fn find_contacts_with_number_ending_on(
        &self,
        suffix: &str,
    ) -> LookupResult<Vec<ContactWithPhoneNumbers>> {
        self.track_call("find_contacts_with_number_ending_on");
        self.seen_suffixes.lock().unwrap().push(suffix.to_string());

        if let Some(message) = self.failure.lock().unwrap().as_ref() {
            return Err(LookupError::StoreUnavailable(message.clone()));
        }

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts
            .values()
            .filter(|contact| contact.has_number_ending_on(suffix))
            .cloned()
            .collect())
    }
}

/// Build a contact fixture with a first name and a set of stored numbers.
#[allow(dead_code)]
pub fn sample_contact(id: &str, first_name: &str, numbers: &[&str]) -> ContactWithPhoneNumbers {
    let mut contact = ContactWithPhoneNumbers::new(ContactId::new(id).unwrap());
    contact.first_name = Some(first_name.to_string());
    contact.phone_numbers = numbers
        .iter()
        .map(|n| PhoneNumber::new(*n, PhoneNumberType::Mobile, false).unwrap())
        .collect();
    contact
}
