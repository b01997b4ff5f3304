use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Tells the site owner about a stored contact message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify_new_message(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError>;
}
