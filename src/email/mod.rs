pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// Transactional mailer. Every send is best-effort: callers spawn sends off
/// the request path and only log failures.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    pub async fn send_welcome(&self, to_email: &str, to_name: &str) -> Result<(), String> {
        let html = templates::render_welcome(to_name);
        self.send(to_email, "Welcome to SkillSync", &html).await
    }

    pub async fn send_application_accepted(
        &self,
        to_email: &str,
        job_title: &str,
        company: &str,
    ) -> Result<(), String> {
        let html = templates::render_application_accepted(job_title);
        self.send(to_email, &format!("Offer: {job_title} at {company}"), &html)
            .await
    }

    pub async fn send_application_rejected(
        &self,
        to_email: &str,
        job_title: &str,
    ) -> Result<(), String> {
        let html = templates::render_application_rejected(job_title);
        self.send(to_email, &format!("Update: {job_title}"), &html)
            .await
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
