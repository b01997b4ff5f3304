use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::email::application::ports::outgoing::{
    ContactNotificationError, ContactNotifier, EmailSender, OutgoingEmail,
};

pub const CONTACT_SUBJECT: &str = "New Contact Form Submission";

/// Sends one HTML email per contact message to a fixed recipient.
#[derive(Clone)]
pub struct ContactEmailNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    recipient: String,
}

impl fmt::Debug for ContactEmailNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailNotifier")
            .field("sender", &"<dyn EmailSender>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

impl ContactEmailNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, recipient: &str) -> Self {
        Self {
            sender,
            recipient: recipient.to_string(),
        }
    }

    fn render(&self, message: &ContactMessage) -> OutgoingEmail {
        let html_body = format!(
            "<h3>New message from your portfolio</h3>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong> {}</p>\n",
            escape_html(&message.name),
            escape_html(&message.email),
            escape_html(&message.message),
        );

        OutgoingEmail {
            to: self.recipient.clone(),
            subject: CONTACT_SUBJECT.to_string(),
            html_body,
            reply_to: Some(message.email.clone()),
        }
    }
}

#[async_trait]
impl ContactNotifier for ContactEmailNotifier {
    async fn notify_new_message(
        &self,
        message: &ContactMessage,
    ) -> Result<(), ContactNotificationError> {
        self.sender
            .send_email(self.render(message))
            .await
            .map_err(ContactNotificationError::EmailSendingFailed)
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
