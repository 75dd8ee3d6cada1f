//! Contact form

use crate::site::{Site, SiteError};
use crate::storage::Collection;
use crate::types::{timestamp_now, ContactMessage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Site {
    /// Append a contact message. Messages are never read back by the UI.
    pub fn submit_contact(&self, form: &ContactForm) -> Result<ContactMessage, SiteError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SiteError::MissingContactFields);
        }

        let entry = ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            sent_at: timestamp_now(),
        };
        let mut messages: Vec<ContactMessage> = self.store.load(Collection::ContactMessages);
        messages.push(entry.clone());
        self.store.save(Collection::ContactMessages, &messages)?;

        tracing::info!("Contact message from {}", entry.email);
        Ok(entry)
    }
}
