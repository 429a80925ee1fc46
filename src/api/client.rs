// Blog API HTTP client.
// Handles base URL resolution, default headers, and response status checking.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{BlogError, Result};

/// HTTP client bound to one remote post collection.
#[derive(Debug, Clone)]
pub struct BlogClient {
    client: Client,
    base_url: Url,
}

impl BlogClient {
    /// Create a client for the collection at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| BlogError::Config(format!("invalid api base {:?}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BlogError::Config(format!(
                "api base {} cannot hold path segments",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("blogstore/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(BlogError::Api)?;

        Ok(Self { client, base_url })
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base, config.request_timeout())
    }

    /// The collection URL every request is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a single post: `<base>/<id>`, with the id percent-encoded as one segment.
    pub fn post_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    /// GET a URL and check the status.
    pub async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(BlogError::Api)?;
        self.check_response(response).await
    }

    /// GET a URL with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        url: Url,
        params: &T,
    ) -> Result<Response> {
        tracing::debug!(%url, "GET with params");
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(BlogError::Api)?;
        self.check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(BlogError::NotFound(url))
            }
            status => Err(BlogError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
