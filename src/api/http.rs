//! HTTP transport shared by the API surfaces

use crate::config::Config;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error body shape returned by the backend on failed requests
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Thin wrapper around a reqwest client bound to one backend base URL.
///
/// Maps transport failures to [`Error::Network`] and non-2xx responses to
/// [`Error::Server`], surfacing the backend's `message` field verbatim when
/// the body carries one. Requests are never retried here.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpClient {
    /// Creates a new HttpClient from the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            inner,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET request and decodes the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        debug!(path, "GET");
        let mut request = self.inner.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    /// Issues a GET request with query parameters and decodes the response
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<T> {
        debug!(path, "GET");
        let mut request = self.inner.get(self.url(path)).query(query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    /// Issues a POST request with a JSON body and decodes the response
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        debug!(path, "POST");
        let mut request = self.inner.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    /// Issues a PUT request with a JSON body and decodes the response
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        debug!(path, "PUT");
        let mut request = self.inner.put(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    /// Issues a PUT request with a multipart form and decodes the response
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        token: &str,
    ) -> Result<T> {
        debug!(path, "PUT multipart");
        let request = self
            .inner
            .put(self.url(path))
            .multipart(form)
            .bearer_auth(token);
        self.execute(request).await
    }

    /// Issues a DELETE request and decodes the response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        debug!(path, "DELETE");
        let request = self.inner.delete(self.url(path)).bearer_auth(token);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        Err(message.into())
    }
}
