//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` implementing [`HttpClient`].
/// It inherits reqwest's configuration, including connection handling
/// and timeouts; to control timeouts, build a `reqwest::Client` with
/// the desired settings and pass it to [`ReqwestClient::from_client`].
///
/// Response bodies are dropped without being read; webhook endpoints
/// signal everything through the status code and headers.
///
/// # Example
///
/// ```no_run
/// use discord_hook::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://example.com/api/webhooks/1/token")?;
/// let request = HttpRequest::post(url, b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, proxies,
    /// TLS, etc.). The same client may be shared across concurrent
    /// deliveries; reqwest clients are cheap to clone.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.post(req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        let response = builder.body(req.body).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        // Dropping the response here closes the body unread.
        Ok(HttpResponse::new(
            response.status(),
            response.headers().clone(),
        ))
    }
}
