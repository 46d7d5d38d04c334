//! HTTP request/response types and client trait.

use std::time::Duration;

use super::HttpError;

/// An HTTP POST to be sent to a webhook endpoint.
///
/// A value type that can be handed to any [`HttpClient`]
/// implementation. Webhook delivery only ever POSTs, so the method is
/// implied; headers and body use standard `http` crate types.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL.
    pub url: url::Url,
    /// Headers to send.
    pub headers: http::HeaderMap,
    /// Request body.
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST request with the given URL and body.
    #[must_use]
    pub fn post(url: url::Url, body: Vec<u8>) -> Self {
        Self {
            url,
            headers: http::HeaderMap::new(),
            body,
        }
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// The status line and headers of an HTTP response.
///
/// Webhook delivery decides purely on the status code (plus the
/// `retry-after` header on 429), so response bodies are never read and
/// are not represented here.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: http::StatusCode,
    /// Response headers.
    pub headers: http::HeaderMap,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap) -> Self {
        Self { status, headers }
    }

    /// Creates a response with the given status and no headers.
    #[must_use]
    pub fn status(status: http::StatusCode) -> Self {
        Self::new(status, http::HeaderMap::new())
    }

    /// Returns the server-suggested retry delay from the `retry-after`
    /// header, interpreted as milliseconds.
    ///
    /// `None` when the header is absent or not an integer.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.headers.get(http::header::RETRY_AFTER)?;
        let millis: u64 = value.to_str().ok()?.trim().parse().ok()?;
        Some(Duration::from_millis(millis))
    }
}

/// Trait for making HTTP requests.
///
/// Abstracts the HTTP client implementation, enabling dependency
/// injection for testing with mock clients and swapping HTTP libraries
/// without changing the delivery loop. Cancellation and timeouts are
/// entirely the implementation's concern; the delivery loop imposes no
/// deadline of its own.
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response status line and
    /// headers, discarding any body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request produces no HTTP status:
    /// connection failure ([`HttpError::Connection`]), timeout
    /// ([`HttpError::Timeout`]), or an unusable URL
    /// ([`HttpError::InvalidUrl`]).
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
