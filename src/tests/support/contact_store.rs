use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
};

/// In-memory `contact_messages` table shared by the write and read ports.
#[derive(Clone, Default)]
pub struct InMemoryContactStore {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl InMemoryContactStore {
    pub fn stored_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn create(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let (name, email, message) = message.into_parts();
        let stored = ContactMessage {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            message,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ContactQuery for InMemoryContactStore {
    async fn list_newest_first(&self) -> Result<Vec<ContactMessage>, ContactQueryError> {
        // later inserts win timestamp ties
        let mut messages: Vec<ContactMessage> =
            self.messages.lock().unwrap().iter().rev().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }
}
