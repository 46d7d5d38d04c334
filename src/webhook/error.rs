//! Error types for webhook delivery.

use thiserror::Error;

use crate::message::MAX_EMBEDS;

/// Error type for transport-level HTTP failures.
///
/// Describes what went wrong below the HTTP status layer. None of
/// these are retried by the delivery loop; they surface immediately as
/// [`WebhookError::Transport`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the client's configured
    /// timeout period.
    #[error("request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This indicates a configuration error rather than a transient
    /// failure.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a failed webhook delivery.
///
/// Every failure is returned to the caller; nothing is swallowed. The
/// only condition handled internally is a 429 with retries enabled,
/// which is a loop iteration rather than an error.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The message had neither content nor embeds. Rejected before any
    /// network call.
    #[error("message must have content or at least one embed")]
    EmptyMessage,

    /// The message carried more than [`MAX_EMBEDS`] embeds. Rejected
    /// before any network call.
    #[error("message has {0} embeds, the endpoint accepts at most {MAX_EMBEDS}")]
    TooManyEmbeds(usize),

    /// The message failed to serialize to JSON.
    ///
    /// Should not happen for well-formed in-memory data, but is
    /// surfaced rather than hidden if it does.
    #[error("failed to encode message: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The request never produced an HTTP status (connection refused,
    /// timeout, DNS failure). Never retried.
    #[error("transport failure: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered 429.
    ///
    /// Returned either immediately when rate-limit retries are
    /// disabled, or once a configured retry ceiling is exhausted.
    #[error("rate limited by the endpoint")]
    RateLimited,

    /// The endpoint answered with a status other than 204 or 429.
    /// Never retried.
    #[error("unexpected status {0}")]
    BadStatus(http::StatusCode),
}
