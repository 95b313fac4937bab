use std::sync::Arc;

use crate::mailer::Mailer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Delivery channel for submission notifications. `None` when no mail
    /// credential is configured; submissions are then logged, not emailed.
    pub mailer: Option<Arc<dyn Mailer>>,
}
