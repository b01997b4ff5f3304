use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};
use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Authenticated TLS relay (e.g. smtp.gmail.com). Nothing is sent until
    /// the first email, so an unreachable relay only surfaces per message.
    pub fn relay(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), smtp_username))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), String> {
        let mut builder = Message::builder()
            .from(self.from_email.parse().map_err(|e| format!("{:?}", e))?)
            .to(email.to.parse().map_err(|e| format!("{:?}", e))?)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML);

        // A bad visitor address must not block the notification itself.
        if let Some(reply_to) = email.reply_to.as_deref().and_then(|r| r.parse().ok()) {
            builder = builder.reply_to(reply_to);
        }

        let message = builder.body(email.html_body).map_err(|e| e.to_string())?;

        self.mailer.send(message).await
    }
}
