use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Errors raised while fetching a JSON payload.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// One-method HTTP seam: perform a GET, return the raw body.
///
/// Tests substitute a stub returning canned payloads and recording calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Default transport over [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
        }
    }

    /// Set a per-request timeout. None is configured by default; callers
    /// wanting bounded latency opt in here.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url)?;
        let mut request = self.client.get(url.as_str());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        Ok(response.text().await?)
    }
}

/// GET `url` and parse the response body as JSON.
///
/// Exactly one outbound request per invocation; the payload is returned
/// verbatim with no schema enforcement. Transport errors and malformed JSON
/// propagate to the caller. Nothing is cached here — memoization is a
/// separate capability ([`crate::memoize::Memoized`]).
pub async fn get_json(url: &str) -> Result<Value, FetchError> {
    get_json_with(&ReqwestTransport::new(), url).await
}

/// Same as [`get_json`], against a caller-supplied transport.
pub async fn get_json_with(
    transport: &dyn HttpTransport,
    url: &str,
) -> Result<Value, FetchError> {
    log::debug!("GET {}", url);
    let body = transport.get(url).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde_json::json;
    use tokio_test::assert_ok;

    use super::*;

    /// Stub transport returning a canned body and recording every call.
    struct StubTransport {
        body: String,
        calls: AtomicUsize,
        urls: Mutex<Vec<String>>,
    }

    impl StubTransport {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                calls: AtomicUsize::new(0),
                urls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(&self, url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn test_get_json_with_stub_transport() {
        let cases = [
            ("http://example.com", json!({"payload": true})),
            ("http://holberton.io", json!({"payload": false})),
        ];

        for (test_url, test_payload) in &cases {
            let transport = StubTransport::new(&test_payload.to_string());
            let payload = get_json_with(&transport, test_url).await.unwrap();

            assert_eq!(payload, *test_payload);
            assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
            assert_eq!(*transport.urls.lock().unwrap(), vec![test_url.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_get_json_with_malformed_body() {
        let transport = StubTransport::new("not json");
        let err = get_json_with(&transport, "http://example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }

    #[tokio::test]
    async fn test_reqwest_transport_invalid_url() {
        let transport = ReqwestTransport::new();
        let err = transport.get("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_get_json_against_mock_server() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"payload": true}"#)
            .create_async()
            .await;

        let result = get_json(&server.url()).await;
        let payload = assert_ok!(result);
        assert_eq!(payload, json!({"payload": true}));
        mock.assert_async().await;
    }
}
