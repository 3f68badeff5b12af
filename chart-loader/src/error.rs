use crate::fetch::FetchError;
use slogger_plotly_processor::payloads::PayloadError;
use std::fmt;

/// Anything that keeps a chart from being built. All of it reaches the user
/// as the same fetch error alert.
#[derive(Debug)]
pub enum LoadError {
    Fetch(FetchError),
    Payload(PayloadError),
}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        LoadError::Fetch(err)
    }
}

impl From<PayloadError> for LoadError {
    fn from(err: PayloadError) -> Self {
        LoadError::Payload(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Payload(PayloadError::Decode(err))
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "{}", e),
            LoadError::Payload(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {}
