//! HTTP client for the waitlist API
//!
//! One `POST /waitlist` per submission. No retries: a failure is reported
//! back to the form, which lets the user try again.

use super::payload::WaitlistPayload;
use super::traits::WaitlistApi;
use crate::config::TuiConfig;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// Default API origin
pub const DEFAULT_API_URL: &str = "https://fiva-waitlist-page-production.up.railway.app";

/// Shown when the API rejects a sign-up without a usable detail
const REJECTED_FALLBACK: &str = "Error al registrar. Intenta nuevamente.";

/// Reasons a submission did not go through. `Display` is the user-facing alert.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The API answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never got an answer
    #[error("Error de conexión. Por favor intenta nuevamente.")]
    Transport(#[source] reqwest::Error),

    /// The task driving the request went away before reporting back
    #[error("Error de conexión. Por favor intenta nuevamente.")]
    Interrupted,
}

impl SubmissionError {
    /// HTTP status of a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Interrupted => None,
        }
    }
}

/// Client for the waitlist API
pub struct WaitlistClient {
    client: Client,
    /// Full URL of the sign-up endpoint
    endpoint: String,
}

impl WaitlistClient {
    /// Create a client from user configuration, falling back to the FIVA origin
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let base_url = config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        Self::with_base_url(base_url, config.request_timeout())
    }

    /// Create a client against an explicit origin
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/waitlist", base_url.trim_end_matches('/'));

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WaitlistApi for WaitlistClient {
    async fn submit(&self, payload: &WaitlistPayload) -> Result<(), SubmissionError> {
        info!(endpoint = %self.endpoint, "Submitting waitlist sign-up");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Waitlist request failed");
                SubmissionError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            info!(status = status.as_u16(), "Waitlist sign-up accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "Waitlist sign-up rejected");

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

/// Pull the user-facing message out of an error body.
///
/// A string `detail` is used as is, any other `detail` as its JSON text.
fn rejection_message(body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("detail").cloned());

    match detail {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Null) | Some(Value::String(_)) | None => REJECTED_FALLBACK.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> WaitlistPayload {
        WaitlistPayload {
            email: "a@b.com".to_string(),
            phone: Some("+573001234567".to_string()),
            company_name: "Acme".to_string(),
            company_niche: "Salud".to_string(),
            company_size: "11-50".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> WaitlistClient {
        WaitlistClient::with_base_url(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    mod endpoint {
        use super::*;

        #[test]
        fn test_endpoint_appends_path() {
            let client =
                WaitlistClient::with_base_url("http://localhost:8000", Duration::from_secs(1))
                    .unwrap();
            assert_eq!(client.endpoint(), "http://localhost:8000/waitlist");
        }

        #[test]
        fn test_trailing_slash_is_trimmed() {
            let client =
                WaitlistClient::with_base_url("http://localhost:8000/", Duration::from_secs(1))
                    .unwrap();
            assert_eq!(client.endpoint(), "http://localhost:8000/waitlist");
        }

        #[test]
        fn test_unconfigured_client_uses_fiva_origin() {
            let client = WaitlistClient::new(&TuiConfig::default()).unwrap();
            assert_eq!(
                client.endpoint(),
                "https://fiva-waitlist-page-production.up.railway.app/waitlist"
            );
        }

        #[test]
        fn test_config_file_origin_is_used() {
            let config = TuiConfig {
                api_url: Some("http://localhost:8000/".to_string()),
                ..TuiConfig::default()
            };
            let client = WaitlistClient::new(&config).unwrap();
            assert_eq!(client.endpoint(), "http://localhost:8000/waitlist");
        }
    }

    mod rejection_message {
        use super::*;

        #[test]
        fn test_string_detail_is_used() {
            let body = r#"{"detail": "Este email ya está registrado en la waitlist"}"#;
            assert_eq!(
                rejection_message(body),
                "Este email ya está registrado en la waitlist"
            );
        }

        #[test]
        fn test_structured_detail_is_stringified() {
            let body = r#"{"detail": [{"loc": ["body", "phone"], "msg": "field required"}]}"#;
            let message = rejection_message(body);
            assert!(message.starts_with('['));
            assert!(message.contains("field required"));
        }

        #[test]
        fn test_missing_or_empty_detail_falls_back() {
            assert_eq!(rejection_message("{}"), REJECTED_FALLBACK);
            assert_eq!(rejection_message(r#"{"detail": ""}"#), REJECTED_FALLBACK);
            assert_eq!(rejection_message(r#"{"detail": null}"#), REJECTED_FALLBACK);
        }

        #[test]
        fn test_non_json_body_falls_back() {
            assert_eq!(rejection_message("Bad Gateway"), REJECTED_FALLBACK);
            assert_eq!(rejection_message(""), REJECTED_FALLBACK);
        }
    }

    mod submit {
        use super::*;

        #[tokio::test]
        async fn test_posts_json_payload() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/waitlist"))
                .and(header("content-type", "application/json"))
                .and(body_json(json!({
                    "email": "a@b.com",
                    "phone": "+573001234567",
                    "company_name": "Acme",
                    "company_niche": "Salud",
                    "company_size": "11-50",
                })))
                .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                    "message": "Registrado exitosamente en la waitlist"
                })))
                .expect(1)
                .mount(&server)
                .await;

            let result = client_for(&server).submit(&payload()).await;
            assert_ok!(result);
        }

        #[tokio::test]
        async fn test_conflict_surfaces_detail() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/waitlist"))
                .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                    "detail": "Este email ya está registrado en la waitlist"
                })))
                .mount(&server)
                .await;

            let err = client_for(&server).submit(&payload()).await.unwrap_err();
            match &err {
                SubmissionError::Rejected { status, message } => {
                    assert_eq!(*status, 409);
                    assert_eq!(message, "Este email ya está registrado en la waitlist");
                }
                other => panic!("expected rejection, got {other:?}"),
            }
            assert_eq!(
                err.to_string(),
                "Este email ya está registrado en la waitlist"
            );
        }

        #[tokio::test]
        async fn test_server_error_without_body_uses_fallback() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server)
                .await;

            let err = client_for(&server).submit(&payload()).await.unwrap_err();
            assert_eq!(err.to_string(), REJECTED_FALLBACK);
        }

        #[tokio::test]
        async fn test_single_attempt_on_failure() {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(503))
                .expect(1)
                .mount(&server)
                .await;

            let result = client_for(&server).submit(&payload()).await;
            assert_err!(result);
        }

        #[tokio::test]
        async fn test_unreachable_server_is_transport_error() {
            let client =
                WaitlistClient::with_base_url("http://127.0.0.1:1", Duration::from_secs(2))
                    .unwrap();
            let err = client.submit(&payload()).await.unwrap_err();
            assert!(matches!(err, SubmissionError::Transport(_)));
            assert_eq!(
                err.to_string(),
                "Error de conexión. Por favor intenta nuevamente."
            );
        }
    }
}
