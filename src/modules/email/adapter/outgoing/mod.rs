mod smtp_sender;

pub use smtp_sender::{Mailer, SmtpEmailSender};
