//! HTTP clients for OpenAlex and the Semantic Scholar Graph API.
//!
//! Each client method issues exactly one request and maps every non-2xx
//! status, timeout and decode failure to a [`ClientError`]. Pagination and
//! fallback policy live in [`crate::harvest`].

mod openalex;
mod semantic_scholar;

pub use openalex::OpenAlexClient;
pub use semantic_scholar::SemanticScholarClient;

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, IntoUrl};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};

/// Connection pool plus the request timeout used to label timeouts.
#[derive(Clone)]
struct HttpCore {
    client: Client,
    request_timeout: Duration,
}

impl HttpCore {
    fn new(config: &Config, mut headers: HeaderMap) -> anyhow::Result<Self> {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, request_timeout: config.request_timeout })
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T, U>(&self, url: U, params: &[(&str, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
        U: IntoUrl,
    {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let response = handle_response(response).await?;
        let value: serde_json::Value = response.json().await.map_err(|e| self.transport_error(e))?;

        serde_json::from_value(value).map_err(ClientError::from)
    }

    fn transport_error(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::Http(error)
        }
    }
}

/// Handle API response status codes.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status.as_u16() {
        429 => Err(ClientError::RateLimited),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::not_found(text))
        }
        400 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::bad_request(text))
        }
        500..=599 => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::server(status.as_u16(), text))
        }
        _ => {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
        }
    }
}
