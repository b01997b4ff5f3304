use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::modules::contact::application::domain::entities::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::email::application::ports::outgoing::ContactNotifier;
use crate::shared::store::AvailabilityGate;

// ============================================================================
// Service Implementation
// ============================================================================

/// Validates, stores, then notifies. The response depends only on the first
/// two steps; notification runs detached and its outcome is only logged.
pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
    gate: AvailabilityGate,
    notifier: Option<Arc<dyn ContactNotifier + Send + Sync>>,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(
        repository: R,
        gate: AvailabilityGate,
        notifier: Option<Arc<dyn ContactNotifier + Send + Sync>>,
    ) -> Self {
        Self {
            repository,
            gate,
            notifier,
        }
    }

    fn spawn_notification(&self, stored: &ContactMessage) {
        let Some(notifier) = self.notifier.clone() else {
            debug!(message_id = %stored.id, "Contact notification not configured, skipping");
            return;
        };

        let stored = stored.clone();
        tokio::spawn(async move {
            match notifier.notify_new_message(&stored).await {
                Ok(()) => debug!(message_id = %stored.id, "Contact notification sent"),
                Err(e) => error!(
                    message_id = %stored.id,
                    error = %e,
                    "Contact notification failed"
                ),
            }
        });
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError> {
        let new_message = NewContactMessage::new(command.name, command.email, command.message)?;

        self.gate.ensure_connected()?;

        let stored = self.repository.create(new_message).await?;
        info!(message_id = %stored.id, "Contact message stored");

        self.spawn_notification(&stored);

        Ok(stored)
    }
}

// ============================================================================
// Tests
// ============================================================================
