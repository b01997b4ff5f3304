use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactQuery;
use crate::shared::store::AvailabilityGate;

pub struct ListContactMessagesService<Q>
where
    Q: ContactQuery,
{
    query: Q,
    gate: AvailabilityGate,
}

impl<Q> ListContactMessagesService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q, gate: AvailabilityGate) -> Self {
        Self { query, gate }
    }
}

#[async_trait]
impl<Q> ListContactMessagesUseCase for ListContactMessagesService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListContactMessagesError> {
        self.gate.ensure_connected()?;
        Ok(self.query.list_newest_first().await?)
    }
}
