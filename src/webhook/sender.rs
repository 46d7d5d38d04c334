//! Webhook sender trait and delivery loop.

use crate::message::{MAX_EMBEDS, Message};
use crate::time::{Sleeper, TokioSleeper};

use super::{HttpClient, HttpRequest, RetryPolicy, WebhookError};

/// Trait for delivering a message to a webhook endpoint.
///
/// This abstraction allows swapping the delivery mechanism and enables
/// testing callers with mocks.
pub trait WebhookSender: Send + Sync {
    /// Delivers a message, blocking the caller until the endpoint
    /// accepts it or a terminal failure occurs.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] describing the first terminal failure:
    /// invalid payload, encoding failure, transport failure, exhausted
    /// rate-limit retries, or an unexpected status code.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;
}

/// Webhook client with rate-limit retry support.
///
/// Validates the message, serializes it to JSON, POSTs it to the
/// configured endpoint, and interprets the status code: 204 is
/// success, 429 waits and re-sends per the [`RetryPolicy`], anything
/// else fails immediately. Each call is independent; no state is
/// shared between deliveries beyond the HTTP client itself.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation
/// - `S`: the sleeper used for retry delays (defaults to
///   [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use discord_hook::message::Message;
/// use discord_hook::webhook::{ReqwestClient, WebhookClient, WebhookSender};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hook = WebhookClient::new(
///     ReqwestClient::new(),
///     Url::parse("https://example.com/api/webhooks/1/token")?,
/// );
/// hook.send(&Message::new().with_content("hello")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookClient<H, S = TokioSleeper> {
    client: H,
    sleeper: S,
    url: url::Url,
    retry_policy: RetryPolicy,
}

impl<H> WebhookClient<H, TokioSleeper> {
    /// Creates a webhook client for the given endpoint.
    ///
    /// Uses the default [`RetryPolicy`] (unbounded rate-limit retries)
    /// and [`TokioSleeper`] for delays.
    #[must_use]
    pub fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            sleeper: TokioSleeper,
            url,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl<H, S> WebhookClient<H, S> {
    /// Sets a custom sleeper for retry delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> WebhookClient<H, S2> {
        WebhookClient {
            client: self.client,
            sleeper,
            url: self.url,
            retry_policy: self.retry_policy,
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }
}

/// Checks the payload invariants the endpoint enforces.
///
/// Runs before any serialization or network I/O.
fn validate(message: &Message) -> Result<(), WebhookError> {
    if message.is_empty() {
        return Err(WebhookError::EmptyMessage);
    }
    if message.embeds.len() > MAX_EMBEDS {
        return Err(WebhookError::TooManyEmbeds(message.embeds.len()));
    }
    Ok(())
}

impl<H: HttpClient, S: Sleeper> WebhookClient<H, S> {
    fn build_request(&self, body: Vec<u8>) -> HttpRequest {
        HttpRequest::post(self.url.clone(), body).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        )
    }

    async fn send_with_retry(&self, message: &Message) -> Result<(), WebhookError> {
        validate(message)?;
        let body = serde_json::to_vec(message)?;

        let mut retries: u32 = 0;
        loop {
            let response = self.client.request(self.build_request(body.clone())).await?;

            match response.status {
                http::StatusCode::NO_CONTENT => {
                    tracing::debug!(url = %self.url, "webhook delivered");
                    return Ok(());
                }
                http::StatusCode::TOO_MANY_REQUESTS => {
                    if !self.retry_policy.should_retry(retries) {
                        return Err(WebhookError::RateLimited);
                    }
                    retries += 1;
                    let delay = response
                        .retry_after()
                        .unwrap_or(self.retry_policy.fallback_delay);
                    tracing::warn!(
                        delay_ms = delay.as_millis(),
                        retries,
                        "webhook rate limited, waiting before re-send"
                    );
                    self.sleeper.sleep(delay).await;
                }
                status => return Err(WebhookError::BadStatus(status)),
            }
        }
    }
}

impl<H: HttpClient, S: Sleeper> WebhookSender for WebhookClient<H, S> {
    async fn send(&self, message: &Message) -> Result<(), WebhookError> {
        self.send_with_retry(message).await
    }
}
