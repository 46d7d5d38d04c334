//! Webhook delivery layer.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Message delivery with rate-limit retries ([`WebhookSender`],
//!   [`WebhookClient`])
//! - Retry policy configuration ([`RetryPolicy`])

mod client;
mod error;
mod http;
mod retry;
mod sender;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use retry::RetryPolicy;
pub use sender::{WebhookClient, WebhookSender};
