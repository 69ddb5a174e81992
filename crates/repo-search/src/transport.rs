//! HTTP transport with status classification
//!
//! The transport executes exactly one request and either returns the raw
//! response body or classifies the failure. Classification is a pure
//! function of (status code, body); the request itself is the only side
//! effect. Retries, if ever wanted, belong to callers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use thiserror::Error;

use crate::types::FailureResponse;

/// User agent sent with every request; the API rejects anonymous clients.
const USER_AGENT: &str = concat!("repo-browser/", env!("CARGO_PKG_VERSION"));

/// Classified transport failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server could not be reached or produced no usable response
    /// (connect failure, DNS, timeout, or an out-of-range status code)
    #[error("network error - {0}")]
    Network(String),

    /// A 4xx response, with the server's message when one was decodable
    #[error("client error - {}", .message.as_deref().unwrap_or("an unknown client error occurred"))]
    Client {
        status: u16,
        message: Option<String>,
    },

    /// A 5xx response, with the server's message when one was decodable
    #[error("server error - {}", .message.as_deref().unwrap_or("an unknown server error occurred"))]
    Server { message: Option<String> },
}

/// Classify an HTTP response into success or a [`TransportError`].
///
/// 2xx is success. 4xx and 5xx carry the server's `{"message": ...}` when
/// the body decodes as one; a body that does not decode leaves the message
/// absent without changing the classification. Anything outside those
/// ranges is treated as a network-level failure.
pub fn classify(status: u16, body: &[u8]) -> Result<(), TransportError> {
    match status {
        200..=299 => Ok(()),
        400..=499 => Err(TransportError::Client {
            status,
            message: extract_message(body),
        }),
        500..=599 => Err(TransportError::Server {
            message: extract_message(body),
        }),
        other => Err(TransportError::Network(format!(
            "unexpected status {other}"
        ))),
    }
}

/// Best-effort decode of the API's error envelope
fn extract_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<FailureResponse>(body)
        .ok()
        .map(|response| response.message)
}

/// HTTP transport abstraction
///
/// Implementations must be `Send + Sync` so one transport can serve
/// concurrent in-flight requests without extra locking.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a single GET request.
    ///
    /// Returns the raw response body on a 2xx response, or the classified
    /// failure otherwise.
    async fn get(&self, url: Url) -> Result<Vec<u8>, TransportError>;
}

/// `reqwest`-backed [`Transport`] implementation
///
/// The underlying client is connection-pooled and shareable; cloning this
/// transport clones a handle, not the pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Arc<reqwest::Client>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            http: Arc::new(client),
        }
    }

    /// Create a transport whose requests are abandoned after `timeout`.
    ///
    /// A request that exceeds the deadline surfaces as
    /// [`TransportError::Network`].
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            http: Arc::new(client),
        })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<Vec<u8>, TransportError> {
        debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        classify(status, &body)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILURE_BODY: &[u8] = br#"{"message":"fail"}"#;

    #[test]
    fn test_classify_success_range() {
        assert_eq!(classify(200, b""), Ok(()));
        assert_eq!(classify(204, FAILURE_BODY), Ok(()));
        assert_eq!(classify(299, b"ignored"), Ok(()));
    }

    #[test]
    fn test_classify_client_error_carries_message() {
        assert_eq!(
            classify(404, FAILURE_BODY),
            Err(TransportError::Client {
                status: 404,
                message: Some("fail".to_string()),
            })
        );
    }

    #[test]
    fn test_classify_server_error_carries_message() {
        assert_eq!(
            classify(500, FAILURE_BODY),
            Err(TransportError::Server {
                message: Some("fail".to_string()),
            })
        );
    }

    #[test]
    fn test_classify_undecodable_body_leaves_message_absent() {
        assert_eq!(
            classify(404, b"<html>not json</html>"),
            Err(TransportError::Client {
                status: 404,
                message: None,
            })
        );
        assert_eq!(
            classify(503, b""),
            Err(TransportError::Server { message: None })
        );
    }

    #[test]
    fn test_classify_out_of_range_status_is_network_error() {
        assert_eq!(
            classify(301, FAILURE_BODY),
            Err(TransportError::Network("unexpected status 301".to_string()))
        );
        assert_eq!(
            classify(100, b""),
            Err(TransportError::Network("unexpected status 100".to_string()))
        );
    }

    #[test]
    fn test_error_display_with_and_without_message() {
        let with_message = TransportError::Client {
            status: 404,
            message: Some("fail".to_string()),
        };
        assert_eq!(with_message.to_string(), "client error - fail");

        let without_message = TransportError::Server { message: None };
        assert_eq!(
            without_message.to_string(),
            "server error - an unknown server error occurred"
        );
    }
}
