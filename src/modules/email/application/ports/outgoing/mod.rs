pub mod contact_notifier;
pub mod email_sender;

pub use contact_notifier::{ContactNotificationError, ContactNotifier};
pub use email_sender::{EmailSender, OutgoingEmail};
