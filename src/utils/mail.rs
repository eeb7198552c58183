use async_trait::async_trait;
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use log::info;

use crate::config::MailConfig;
use crate::types::error::AppError;
use crate::types::mail::SendEmail;

/// Outbound mail seam. Handlers only see this trait, so tests can swap in a
/// recording double.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: SendEmail) -> Result<(), AppError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| AppError::Internal(format!("smtp setup failed: {}", e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from
            .parse()
            .map_err(|e| AppError::Internal(format!("invalid sender address: {}", e)))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: SendEmail) -> Result<(), AppError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| AppError::Internal(format!("invalid recipient address: {}", e)))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .body(email.text)
            .map_err(|e| AppError::Internal(format!("failed to build email: {}", e)))?;

        info!("sending mail to {} ({})", email.to, email.subject);

        self.transport
            .send(message)
            .await
            .map_err(|e| AppError::Internal(format!("mail send failed: {}", e)))?;

        Ok(())
    }
}
