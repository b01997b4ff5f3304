mod list_contact_messages_service;
mod submit_contact_service;

pub use list_contact_messages_service::ListContactMessagesService;
pub use submit_contact_service::SubmitContactService;
