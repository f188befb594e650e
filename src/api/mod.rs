//! REST API client.
//!
//! One [`ApiClient`] is shared by every screen. The helpers here build URLs
//! against the configured base, send the request, and turn any non-2xx status
//! into [`ApiError::Status`]. The per-resource endpoint methods live in the
//! submodules.

mod clients;
mod products;
mod sales;

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::ApiError;

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Fails when the base URL does not parse or cannot carry path segments.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base = Url::parse(&config.api_base).map_err(|e| {
            ApiError::Config(format!("Invalid base URL {:?}: {}", config.api_base, e))
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "Base URL {:?} cannot carry a path",
                config.api_base
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve path segments under the base URL. Each segment is percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("Base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a URL and decode its JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.execute(self.http.get(url.clone()), Method::GET, &url).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(url = %url, "Unexpected response body: {}", text);
            ApiError::from(e)
        })
    }

    /// Send a JSON body. The response body is not inspected.
    pub(crate) async fn send_json<B>(&self, method: Method, url: Url, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.http.request(method.clone(), url.clone()).json(body);
        self.execute(request, method, &url).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), ApiError> {
        self.execute(self.http.delete(url.clone()), Method::DELETE, &url)
            .await?;
        Ok(())
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        method: Method,
        url: &Url,
    ) -> Result<Response, ApiError> {
        tracing::debug!(%method, url = %url, "Sending request");

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, url = %url, status = status.as_u16(), "Request failed: {}", body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(%method, url = %url, status = status.as_u16(), "Request succeeded");
        Ok(response)
    }
}
