use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::contact::compose::compose;
use crate::contact::models::ContactRequest;
use crate::contact::validation::validate;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Validate → compose → deliver. Exactly one outbound mail call per accepted
/// submission; no retry. With no mail credential configured the submission is
/// logged and the user still sees success (deliberate product decision).
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<Value>, AppError> {
    let submission = validate(&req).map_err(AppError::Validation)?;

    let Some(mailer) = &state.mailer else {
        info!(
            school = %submission.school_name,
            city = %submission.city,
            phone = %submission.phone,
            "Demo request received; mail credential not configured, logging only"
        );
        return Ok(Json(json!({
            "success": true,
            "message": "Form submitted (email not configured)",
        })));
    };

    let mail = compose(&submission);
    mailer.send(&mail).await.map_err(AppError::Delivery)?;

    info!(
        school = %submission.school_name,
        city = %submission.city,
        "Demo request forwarded by email"
    );
    Ok(Json(json!({
        "success": true,
        "message": "Form submitted successfully",
    })))
}

/// OPTIONS /api/v1/contact
/// Preflight response for browser clients posting from the marketing site.
pub async fn handle_preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::mailer::{MailMessage, Mailer, MailerError};
    use crate::routes::build_app;
    use crate::state::AppState;

    /// Records every send so tests can assert call counts and content.
    struct RecordingMailer {
        sent: Mutex<Vec<MailMessage>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn sent(&self) -> Vec<MailMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &MailMessage) -> Result<(), MailerError> {
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                return Err(MailerError::Api {
                    status: 500,
                    message: "upstream rejected".to_string(),
                });
            }
            Ok(())
        }
    }

    /// The full assembly from `build_app`, middleware included, so these
    /// tests see exactly what the binary serves.
    fn app(mailer: Option<Arc<dyn Mailer>>) -> Router {
        build_app(AppState { mailer })
    }

    fn demo_request() -> Value {
        json!({
            "schoolName": "ABC School",
            "city": "Rohtak",
            "contactName": "Priya",
            "phone": "9876543210",
            "email": "",
            "preferredDate": "",
            "message": ""
        })
    }

    async fn post_contact(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_submit_sends_one_mail_with_subject() {
        let mailer = RecordingMailer::new(false);
        let (status, body) = post_contact(app(Some(mailer.clone())), demo_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "[Demo Request] ABC School - Rohtak");
        assert!(sent[0].reply_to.is_none());
    }

    #[tokio::test]
    async fn test_submit_without_credential_logs_only() {
        let (status, body) = post_contact(app(None), demo_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Form submitted (email not configured)");
    }

    #[tokio::test]
    async fn test_submit_invalid_phone_never_sends() {
        let mailer = RecordingMailer::new(false);
        let mut payload = demo_request();
        payload["phone"] = json!("12345");
        let (status, body) = post_contact(app(Some(mailer.clone())), payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Validation failed");
        assert!(body["errors"]["phone"].is_array());
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_submit_delivery_failure_is_500_without_retry() {
        let mailer = RecordingMailer::new(true);
        let (status, body) = post_contact(app(Some(mailer.clone())), demo_request()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(mailer.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_missing_fields_reports_each_field() {
        let (status, body) = post_contact(app(None), json!({ "phone": "9876543210" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["errors"]["schoolName"].is_array());
        assert!(body["errors"]["city"].is_array());
        assert!(body["errors"]["contactName"].is_array());
        assert!(body["errors"].get("phone").is_none());
    }

    #[tokio::test]
    async fn test_preflight_returns_204_with_cors_headers() {
        // Browser-style preflight, including the request headers a real
        // cross-origin POST sends. Must reach the explicit OPTIONS handler
        // rather than any middleware answering 200 in its place.
        let response = app(None)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/v1/contact")
                    .header(header::ORIGIN, "https://www.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_post_response_carries_cors_origin_header() {
        let response = app(None)
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/contact")
                    .header(header::ORIGIN, "https://www.example.com")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(demo_request().to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
