use crate::fetch::{FetchError, FetchTransport};
use crate::query::QueryParams;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use slogger_utils::json::parse_json_object_root;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchTransport for HttpFetcher {
    async fn get_json(&self, url: &str, query: &QueryParams) -> Result<Value, FetchError> {
        debug!("GET {} {:?}", url, query.pairs());
        let response = self
            .client
            .get(url)
            .query(query.pairs())
            .send()
            .await
            .map_err(FetchError::Request)?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await.map_err(FetchError::Request)?;
        let root = parse_json_object_root(&body).map_err(FetchError::InvalidBody)?;
        Ok(Value::Object(root))
    }
}
