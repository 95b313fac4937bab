mod config;
mod contact;
mod errors;
mod mailer;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::mailer::resend::ResendMailer;
use crate::mailer::Mailer;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting contact API v{}", env!("CARGO_PKG_VERSION"));

    // Mail client is built once and shared by reference across requests.
    // A missing credential is a soft condition: submissions are logged.
    let mailer: Option<Arc<dyn Mailer>> = match config.resend_api_key.clone() {
        Some(api_key) => {
            info!("Mail client initialized (recipient: {})", config.mail_to);
            Some(Arc::new(ResendMailer::new(
                api_key,
                config.mail_from.clone(),
                config.mail_to.clone(),
            )))
        }
        None => {
            info!("RESEND_API_KEY not set; submissions will be logged, not emailed");
            None
        }
    };

    let state = AppState { mailer };

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
