//! Mail delivery, the single point of entry for outbound email.
//!
//! ARCHITECTURAL RULE: no other module may call the mail API directly.
//! Handlers depend on the `Mailer` trait so tests can substitute a mock.

pub mod resend;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// A single notification email. Sender and recipient are fixed per process
/// (configured at startup), so only the per-submission parts travel here.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub subject: String,
    pub body: String,
    /// Submitter's email, when provided, so staff can reply directly.
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempts delivery exactly once. No retry: a failed submission is
    /// surfaced to the caller rather than queued.
    async fn send(&self, message: &MailMessage) -> Result<(), MailerError>;
}
