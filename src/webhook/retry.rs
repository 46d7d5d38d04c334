//! Retry policy for rate-limited deliveries.

use std::time::Duration;

/// Configuration for how the delivery loop reacts to a 429 response.
///
/// Only rate limiting is ever retried; transport failures and other
/// non-204 statuses always fail immediately. The delay for each retry
/// comes from the server's `retry-after` header (milliseconds), with
/// [`fallback_delay`] used when the header is absent or unparseable.
///
/// # Defaults
///
/// - `on_rate_limit`: true
/// - `max_retries`: `None` (retry until the server stops answering 429;
///   platform rate limits are expected to be short-lived)
/// - `fallback_delay`: 5 seconds
///
/// # Example
///
/// ```
/// use discord_hook::webhook::RetryPolicy;
///
/// // Retry forever, trusting retry-after
/// let policy = RetryPolicy::default();
///
/// // Give up after 3 rate-limited attempts
/// let capped = RetryPolicy::new().with_max_retries(3);
///
/// // Fail on the first 429
/// let none = RetryPolicy::disabled();
/// ```
///
/// [`fallback_delay`]: RetryPolicy::fallback_delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Whether a 429 response triggers a retry at all.
    ///
    /// When false, the first 429 fails the delivery with
    /// [`WebhookError::RateLimited`].
    ///
    /// [`WebhookError::RateLimited`]: super::WebhookError::RateLimited
    pub on_rate_limit: bool,

    /// Ceiling on the number of retries after the initial attempt.
    ///
    /// `None` means unbounded. A value of `Some(0)` behaves like
    /// disabling retries.
    pub max_retries: Option<u32>,

    /// Delay used when the 429 response carries no usable
    /// `retry-after` header.
    pub fallback_delay: Duration,
}

impl RetryPolicy {
    /// Default fallback delay (5 seconds).
    pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_secs(5);

    /// Creates a policy that retries rate limits without a ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            on_rate_limit: true,
            max_retries: None,
            fallback_delay: Self::DEFAULT_FALLBACK_DELAY,
        }
    }

    /// Creates a policy that never retries; the first 429 fails.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            on_rate_limit: false,
            max_retries: None,
            fallback_delay: Self::DEFAULT_FALLBACK_DELAY,
        }
    }

    /// Caps the number of rate-limit retries.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the delay used when `retry-after` is absent or invalid.
    #[must_use]
    pub const fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    /// Returns true if another retry is allowed after `retries`
    /// rate-limited attempts so far.
    #[must_use]
    pub fn should_retry(&self, retries: u32) -> bool {
        self.on_rate_limit && self.max_retries.is_none_or(|max| retries < max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
