pub mod http_fetcher;

use crate::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    HttpStatus(reqwest::StatusCode),
    InvalidBody(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Request error: {}", e),
            FetchError::HttpStatus(status) => write!(f, "HTTP status error: {}", status),
            FetchError::InvalidBody(reason) => write!(f, "Invalid response body: {}", reason),
        }
    }
}

impl std::error::Error for FetchError {}

/// GET a JSON document. One call is one request: no retries, no timeout of its own.
#[async_trait]
pub trait FetchTransport: Send + Sync {
    async fn get_json(&self, url: &str, query: &QueryParams) -> Result<Value, FetchError>;
}
