use chrono::Utc;
use validator::Validate;

use crate::{
    constants::{CONTACT_MESSAGES_KEY, CONTACT_MESSAGE_ID_PREFIX},
    entities::contact_message::{ContactMessage, NewContactMessageRequest},
    errors::AppError,
    repositories::{collection::CollectionStore, storage::KeyValueStorage},
    utils::ids::create_id,
};

pub struct ContactHandler<S>
where
    S: KeyValueStorage,
{
    store: CollectionStore<S>,
}

impl<S> ContactHandler<S>
where
    S: KeyValueStorage,
{
    pub fn new(store: CollectionStore<S>) -> Self {
        ContactHandler { store }
    }

    /// Retrieves all received messages, most recent first. The
    /// collection starts out empty; there is no default content.
    pub fn list(&self) -> Vec<ContactMessage> {
        self.store.load(CONTACT_MESSAGES_KEY, &[])
    }

    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Handles a contact form submission. Messages are append-only;
    /// nothing edits or deletes them afterwards.
    pub fn submit(&self, request: NewContactMessageRequest) -> Result<ContactMessage, AppError> {
        request.validate()?;

        let message = ContactMessage {
            id: create_id(CONTACT_MESSAGE_ID_PREFIX),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            message: request.message.trim().to_string(),
            created_at: Utc::now(),
        };

        self.store.mutate(CONTACT_MESSAGES_KEY, &[], |items| {
            items.insert(0, message.clone());
        });

        Ok(message)
    }
}
