//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};
use std::time::Duration;

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/api/webhooks/1/token").unwrap()
}

fn response_with_retry_after(value: &str) -> HttpResponse {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        http::header::RETRY_AFTER,
        http::HeaderValue::from_str(value).unwrap(),
    );
    HttpResponse::new(http::StatusCode::TOO_MANY_REQUESTS, headers)
}

mod request {
    use super::*;

    #[test]
    fn post_sets_url_and_body() {
        let request = HttpRequest::post(test_url(), b"{}".to_vec());

        assert_eq!(request.url, test_url());
        assert_eq!(request.body, b"{}");
        assert!(request.headers.is_empty());
    }

    #[test]
    fn with_header_appends() {
        let request = HttpRequest::post(test_url(), Vec::new())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static("discord-hook"),
            );

        assert_eq!(request.headers.len(), 2);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

mod retry_after {
    use super::*;

    #[test]
    fn integer_header_is_milliseconds() {
        let response = response_with_retry_after("2000");
        assert_eq!(response.retry_after(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let response = response_with_retry_after(" 250 ");
        assert_eq!(response.retry_after(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn missing_header_is_none() {
        let response = HttpResponse::status(http::StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.retry_after(), None);
    }

    #[test]
    fn non_numeric_header_is_none() {
        assert_eq!(response_with_retry_after("soon").retry_after(), None);
        assert_eq!(response_with_retry_after("1.5").retry_after(), None);
        assert_eq!(response_with_retry_after("-5").retry_after(), None);
    }
}
