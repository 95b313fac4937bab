use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// `RESEND_API_KEY` is deliberately optional: without it the service still
/// accepts submissions and logs them instead of emailing (soft configuration
/// failure). `MAIL_TO` becomes required as soon as a credential is present.
#[derive(Debug, Clone)]
pub struct Config {
    pub resend_api_key: Option<String>,
    pub mail_from: String,
    pub mail_to: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let resend_api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let mail_to = if resend_api_key.is_some() {
            require_env("MAIL_TO")?
        } else {
            std::env::var("MAIL_TO").unwrap_or_default()
        };

        Ok(Config {
            resend_api_key,
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Demo Requests <onboarding@resend.dev>".to_string()),
            mail_to,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "contact_api=info,tower_http=info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
