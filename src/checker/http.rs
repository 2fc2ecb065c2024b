// src/checker/http.rs
// =============================================================================
// The `http` linkchecker: checks whether a resource's URL answers over HTTP.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Falls back to GET when the server refuses HEAD (405)
// - Turns network failures (timeout, DNS, SSL, ...) into an unavailable result
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// - match: To sort responses and errors into results
// =============================================================================

use super::{LinkcheckResult, Linkchecker, Resource};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

// Status reported when we never got an HTTP answer
const TRANSPORT_FAILURE_STATUS: u16 = 503;

// Status reported when the resource doesn't hold a checkable URL
const INVALID_URL_STATUS: u16 = 400;

// Checks links with a shared reqwest client
//
// Client is cheap to clone (it's a reference counter internally), so cloning
// the linkchecker shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpLinkchecker {
    client: Client,
}

impl HttpLinkchecker {
    // Creates a linkchecker with reasonable settings:
    // 10 second timeout per request, up to 5 redirects followed
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn request(&self, url: Url) -> LinkcheckResult {
        // First, try a HEAD request (faster, no body download)
        let head = self.client.head(url.clone()).send().await;

        let response = match head {
            // Some servers don't implement HEAD; ask again with GET
            Ok(response) if response.status() == StatusCode::METHOD_NOT_ALLOWED => {
                log::debug!("[linkchecker.http] HEAD refused by {}, retrying with GET", url);
                self.client.get(url).send().await
            }
            other => other,
        };

        match response {
            Ok(response) => analyze_response(response.status()),
            Err(e) => categorize_error(e),
        }
    }
}

#[async_trait]
impl Linkchecker for HttpLinkchecker {
    async fn check(&self, resource: &Resource) -> LinkcheckResult {
        match parse_http_url(&resource.url) {
            Ok(url) => self.request(url).await,
            Err(message) => LinkcheckResult {
                status: INVALID_URL_STATUS,
                available: false,
                date: Utc::now(),
                error: Some(message),
            },
        }
    }
}

// Only absolute http/https URLs can be checked
fn parse_http_url(raw: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("Invalid URL '{}': {}", raw, e))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!("Unsupported scheme '{}' in {}", scheme, raw)),
    }
}

// Analyzes an HTTP status to determine availability
//
// HTTP status codes:
// - 200-299: Success
// - 300-399: Redirect (only seen when the redirect can't be followed)
// - 400-499: Client error (404 not found, etc.)
// - 500-599: Server error
fn analyze_response(status_code: StatusCode) -> LinkcheckResult {
    LinkcheckResult {
        status: status_code.as_u16(),
        available: status_code.is_success() || status_code.is_redirection(),
        date: Utc::now(),
        error: None,
    }
}

// Categorizes the different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
fn categorize_error(error: reqwest::Error) -> LinkcheckResult {
    let error_string = error.to_string();

    let message = if error.is_timeout() {
        "Request timed out".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "Could not resolve hostname".to_string()
        } else {
            "Connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    };

    LinkcheckResult {
        status: TRANSPORT_FAILURE_STATUS,
        available: false,
        date: Utc::now(),
        error: Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;

    #[tokio::test]
    async fn test_available_link() {
        let server = MockServer::start_async().await;
        let mocked = server
            .mock_async(|when, then| {
                when.method("HEAD").path("/dataset.csv");
                then.status(200);
            })
            .await;

        let checker = HttpLinkchecker::new().unwrap();
        let result = checker.check(&Resource::new(server.url("/dataset.csv"))).await;

        mocked.assert_async().await;
        assert_eq!(result.status, 200);
        assert!(result.available);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_broken_link() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("HEAD").path("/gone");
                then.status(404);
            })
            .await;

        let checker = HttpLinkchecker::new().unwrap();
        let result = checker.check(&Resource::new(server.url("/gone"))).await;

        assert_eq!(result.status, 404);
        assert!(!result.available);
    }

    #[tokio::test]
    async fn test_falls_back_to_get_when_head_is_refused() {
        let server = MockServer::start_async().await;
        let head = server
            .mock_async(|when, then| {
                when.method("HEAD").path("/api");
                then.status(405);
            })
            .await;
        let get = server
            .mock_async(|when, then| {
                when.method("GET").path("/api");
                then.status(200).body("ok");
            })
            .await;

        let checker = HttpLinkchecker::new().unwrap();
        let result = checker.check(&Resource::new(server.url("/api"))).await;

        head.assert_async().await;
        get.assert_async().await;
        assert_eq!(result.status, 200);
        assert!(result.available);
    }

    #[tokio::test]
    async fn test_invalid_url_is_not_requested() {
        let checker = HttpLinkchecker::new().unwrap();

        let result = checker.check(&Resource::new("./relative/file.csv")).await;
        assert_eq!(result.status, 400);
        assert!(!result.available);
        assert!(result.error.unwrap().starts_with("Invalid URL"));

        let result = checker.check(&Resource::new("mailto:someone@example.com")).await;
        assert_eq!(result.status, 400);
        assert!(result.error.unwrap().starts_with("Unsupported scheme 'mailto'"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unavailable() {
        let checker = HttpLinkchecker::new().unwrap();

        // Nothing listens on port 1
        let result = checker.check(&Resource::new("http://127.0.0.1:1/dataset.csv")).await;

        assert_eq!(result.status, 503);
        assert!(!result.available);
        assert_eq!(result.error.as_deref(), Some("Connection failed"));
    }

    #[tokio::test]
    async fn test_redirect_loop_is_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("HEAD").path("/loop");
                then.status(307).header("location", "/loop");
            })
            .await;

        let checker = HttpLinkchecker::new().unwrap();
        let result = checker.check(&Resource::new(server.url("/loop"))).await;

        assert_eq!(result.status, 503);
        assert!(!result.available);
        assert_eq!(result.error.as_deref(), Some("Too many redirects"));
    }

    #[test]
    fn test_analyze_response() {
        assert!(analyze_response(StatusCode::OK).available);
        assert!(analyze_response(StatusCode::FOUND).available);
        assert!(!analyze_response(StatusCode::GONE).available);
        assert!(!analyze_response(StatusCode::INTERNAL_SERVER_ERROR).available);
        assert_eq!(analyze_response(StatusCode::GONE).status, 410);
    }
}
