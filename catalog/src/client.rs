use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::command::{ReadCommand, WriteCommand};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RequestError {
    #[snafu(display("Failed to send request to '{}': {}", url, source))]
    SendRequest { url: String, source: reqwest::Error },

    #[snafu(display("Failed to decode response body: {}", source))]
    DecodeResponse { source: reqwest::Error },
}

/// JSON-over-HTTP client for the catalog service. Commands are POSTed to
/// `{endpoint}/read` and `{endpoint}/write`.
#[derive(Debug, Clone)]
pub struct CatalogHttpClient {
    endpoint: String,
    inner: Client,
}

impl CatalogHttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self {
            endpoint,
            inner: Client::new(),
        }
    }

    pub async fn read<T: DeserializeOwned>(&self, req: &ReadCommand) -> Result<T, RequestError> {
        self.send("read", req).await
    }

    pub async fn write<T: DeserializeOwned>(&self, req: &WriteCommand) -> Result<T, RequestError> {
        self.send("write", req).await
    }

    async fn send<Req, Resp>(&self, uri: &str, req: &Req) -> Result<Resp, RequestError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.endpoint, uri);

        let resp = self
            .inner
            .post(&url)
            .json(req)
            .send()
            .await
            .context(SendRequestSnafu { url: url.clone() })?;

        resp.json().await.context(DecodeResponseSnafu)
    }
}
