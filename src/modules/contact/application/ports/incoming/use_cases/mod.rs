mod list_contact_messages;
mod submit_contact;

pub use list_contact_messages::{ListContactMessagesError, ListContactMessagesUseCase};
pub use submit_contact::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase};
