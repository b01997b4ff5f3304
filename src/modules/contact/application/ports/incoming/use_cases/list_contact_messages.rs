use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::outgoing::ContactQueryError;
use crate::shared::store::StoreUnavailable;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("{0}")]
    Unavailable(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<StoreUnavailable> for ListContactMessagesError {
    fn from(err: StoreUnavailable) -> Self {
        ListContactMessagesError::Unavailable(err.to_string())
    }
}

impl From<ContactQueryError> for ListContactMessagesError {
    fn from(err: ContactQueryError) -> Self {
        ListContactMessagesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError>;
}
