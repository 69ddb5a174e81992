//! Repository search service
//!
//! Turns a filter set plus pagination into domain items. The service owns
//! URL construction and response decoding; transport failures are folded
//! into a small caller-facing taxonomy. A 403 response is the one transport
//! failure surfaced distinctly, so callers can explain rate limiting.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Url;
use thiserror::Error;

use crate::filters::FilterSet;
use crate::query;
use crate::transport::{Transport, TransportError};
use crate::types::{Repository, SearchResponse};

/// Errors returned by a repository search.
///
/// All variants are terminal for the single fetch that produced them;
/// nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The configured endpoint URL does not parse. Fatal misconfiguration;
    /// retrying without a config change cannot succeed.
    #[error("the search endpoint URL is invalid")]
    InvalidEndpoint,

    /// The fetch did not complete (network, client, or server failure).
    /// Transient; the caller may simply try again.
    #[error("could not fetch repositories: {0}")]
    FetchFailed(String),

    /// The server denied access (403), typically rate limiting. Carries the
    /// server's own message verbatim when it supplied one.
    #[error("{}", .0.as_deref().unwrap_or("access forbidden (403)"))]
    Forbidden(Option<String>),

    /// The response body was not the expected envelope
    #[error("failed to decode the server response: {0}")]
    DecodingFailed(String),
}

/// Repository search interface
///
/// Implementations must be `Send + Sync` to allow sharing across async
/// tasks. The search session controller depends on this trait, not on a
/// concrete client, so tests can substitute mocks.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    /// Fetch one page of repositories matching the given filters.
    ///
    /// Items are returned in server-provided order; the service never
    /// reorders, dedupes, or filters them. Filtering already happened
    /// server-side via the composed query.
    async fn fetch_page(
        &self,
        filters: &FilterSet,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, SearchError>;
}

/// HTTP-backed [`RepositorySearch`] implementation
#[derive(Clone)]
pub struct SearchClient {
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl SearchClient {
    /// Create a client against the default search endpoint
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_endpoint(crate::DEFAULT_ENDPOINT, transport)
    }

    /// Create a client against a custom endpoint base URL.
    ///
    /// The endpoint is validated lazily: a malformed URL surfaces as
    /// [`SearchError::InvalidEndpoint`] on the first fetch.
    pub fn with_endpoint(endpoint: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    /// The configured endpoint base URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RepositorySearch for SearchClient {
    async fn fetch_page(
        &self,
        filters: &FilterSet,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, SearchError> {
        let mut url = Url::parse(&self.endpoint).map_err(|_| SearchError::InvalidEndpoint)?;

        let composed = query::compose(filters);
        url.query_pairs_mut()
            .append_pair("q", &composed)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());

        debug!("searching repositories: q={composed:?} page={page} per_page={per_page}");

        let body = self.transport.get(url).await.map_err(|err| match err {
            TransportError::Client {
                status: 403,
                message,
            } => SearchError::Forbidden(message),
            other => SearchError::FetchFailed(other.to_string()),
        })?;

        let response: SearchResponse = serde_json::from_slice(&body)
            .map_err(|e| SearchError::DecodingFailed(e.to_string()))?;

        debug!("page {page} returned {} repositories", response.items.len());
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{LicenseOption, StarsOption};
    use std::sync::Mutex;

    /// Transport that records requested URLs and replays a fixed outcome
    struct MockTransport {
        result: Result<Vec<u8>, TransportError>,
        requests: Mutex<Vec<Url>>,
    }

    impl MockTransport {
        fn new(result: Result<Vec<u8>, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requested_urls(&self) -> Vec<Url> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn get(&self, url: Url) -> Result<Vec<u8>, TransportError> {
            self.requests.lock().unwrap().push(url);
            self.result.clone()
        }
    }

    fn success_body() -> Vec<u8> {
        br#"{
            "items": [
                {
                    "id": 1,
                    "name": "demo",
                    "full_name": "octocat/demo",
                    "description": "a demo",
                    "stargazers_count": 10,
                    "language": "Rust",
                    "topics": ["demo"],
                    "owner": {"login": "octocat", "avatar_url": "https://example.com/a.png"},
                    "license": {"spdx_id": "MIT"}
                }
            ]
        }"#
        .to_vec()
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_items() {
        let transport = MockTransport::new(Ok(success_body()));
        let client = SearchClient::new(transport.clone());

        let items = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].full_name, "octocat/demo");
    }

    #[tokio::test]
    async fn test_query_parameters_in_fixed_order() {
        let transport = MockTransport::new(Ok(success_body()));
        let client = SearchClient::new(transport.clone());

        let mut filters = FilterSet::default_set();
        assert!(filters.select("Stars", StarsOption::New.name()));
        assert!(filters.select("License", LicenseOption::Mit.name()));

        client.fetch_page(&filters, 3, 25).await.unwrap();

        let urls = transport.requested_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0].query(),
            Some("q=stars%3A0..50+license%3Amit&page=3&per_page=25")
        );
    }

    #[tokio::test]
    async fn test_invalid_endpoint() {
        let transport = MockTransport::new(Ok(success_body()));
        let client = SearchClient::with_endpoint("not a url", transport.clone());

        let err = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap_err();

        assert_eq!(err, SearchError::InvalidEndpoint);
        assert!(transport.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_forbidden_surfaces_server_message() {
        let transport = MockTransport::new(Err(TransportError::Client {
            status: 403,
            message: Some("fail".to_string()),
        }));
        let client = SearchClient::new(transport);

        let err = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap_err();

        assert_eq!(err, SearchError::Forbidden(Some("fail".to_string())));
        assert_eq!(err.to_string(), "fail");
    }

    #[tokio::test]
    async fn test_forbidden_without_message_has_fallback() {
        let transport = MockTransport::new(Err(TransportError::Client {
            status: 403,
            message: None,
        }));
        let client = SearchClient::new(transport);

        let err = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "access forbidden (403)");
    }

    #[tokio::test]
    async fn test_other_client_errors_are_fetch_failures() {
        let transport = MockTransport::new(Err(TransportError::Client {
            status: 404,
            message: Some("fail".to_string()),
        }));
        let client = SearchClient::new(transport);

        let err = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::FetchFailed(_)));
    }

    #[tokio::test]
    async fn test_server_and_network_errors_are_fetch_failures() {
        for transport_err in [
            TransportError::Server {
                message: Some("fail".to_string()),
            },
            TransportError::Network("connection refused".to_string()),
        ] {
            let transport = MockTransport::new(Err(transport_err));
            let client = SearchClient::new(transport);

            let err = client
                .fetch_page(&FilterSet::default_set(), 1, 10)
                .await
                .unwrap_err();

            assert!(matches!(err, SearchError::FetchFailed(_)));
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decoding_failure() {
        let transport = MockTransport::new(Ok(b"{\"unexpected\": true}".to_vec()));
        let client = SearchClient::new(transport);

        let err = client
            .fetch_page(&FilterSet::default_set(), 1, 10)
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::DecodingFailed(_)));
    }
}
