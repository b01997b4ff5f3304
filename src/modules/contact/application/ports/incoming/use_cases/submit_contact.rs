use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactMessage, ContactValidationError,
};
use crate::modules::contact::application::ports::outgoing::ContactRepositoryError;
use crate::shared::store::StoreUnavailable;

/// Raw form fields; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitContactCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("{0}")]
    Invalid(#[from] ContactValidationError),

    #[error("{0}")]
    PersistenceFailed(String),
}

impl From<ContactRepositoryError> for SubmitContactError {
    fn from(err: ContactRepositoryError) -> Self {
        SubmitContactError::PersistenceFailed(err.to_string())
    }
}

impl From<StoreUnavailable> for SubmitContactError {
    fn from(err: StoreUnavailable) -> Self {
        SubmitContactError::PersistenceFailed(err.to_string())
    }
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactMessage, SubmitContactError>;
}
