mod list_contact_messages;
mod submit_contact;

pub use list_contact_messages::{
    __path_list_contact_messages_handler, list_contact_messages_handler,
};
pub use submit_contact::{
    __path_submit_contact_handler, submit_contact_handler, MessageResponse, SubmitContactRequest,
};
