use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MailMessage, Mailer, MailerError};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

/// Resend transactional-email client with a fixed sender and recipient.
/// Constructed once at startup and shared by reference; holds no mutable
/// state, so concurrent submissions need no coordination.
pub struct ResendMailer {
    client: Client,
    api_key: String,
    from: String,
    to: String,
}

impl ResendMailer {
    pub fn new(api_key: String, from: String, to: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            from,
            to,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailerError> {
        let request_body = SendEmailRequest {
            from: &self.from,
            to: [&self.to],
            subject: &message.subject,
            text: &message.body,
            reply_to: message.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<ResendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(MailerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendEmailResponse = response.json().await?;
        debug!("Mail accepted by Resend: id={}", sent.id);

        Ok(())
    }
}
