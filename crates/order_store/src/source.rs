//! Concrete order sources.

use std::{path::PathBuf, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::FetchError, protocol::Order};
use tracing::debug;
use url::Url;

use crate::OrderSource;

pub const DEFAULT_ORDERS_URL: &str = "https://gist.githubusercontent.com/ryanjn/07512cb1c008a5ec754aea6cbbf4afab/raw/eabb4d324270cf0d3d17a79ffb00ff3cfaf9acc3/orders.json";

/// `GET`s a JSON array of orders from a fixed URL.
pub struct HttpOrderSource {
    http: Client,
    url: Url,
}

impl HttpOrderSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let response = self.http.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(url = %self.url, bytes = body.len(), "order payload received");
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the same JSON array from a local file.
pub struct FileOrderSource {
    path: PathBuf,
}

impl FileOrderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OrderSource for FileOrderSource {
    async fn fetch_orders(&self) -> Result<Vec<Order>, FetchError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        Ok(serde_json::from_slice(&raw)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
