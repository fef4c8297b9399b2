use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{ApiConfig, ApiResponse, AppError};
use std::fmt;

/// Typed HTTP client for the Kronotrack backend.
///
/// Cloning is cheap; the underlying connection pool is shared. A client
/// carries at most one bearer token, attached to every request it sends.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// A copy of this client that authenticates with `token`.
    /// Blank tokens are treated as absent.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.filter(|t| !t.trim().is_empty()).map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with JSON accept header and, when present, the bearer token.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request that never carries credentials (login).
    pub(crate) fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Send `builder` and unwrap the `data` field of the response envelope.
    ///
    /// Failures use the payload's `message` when the backend sent one and
    /// `fallback` otherwise.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request to backend failed");
            AppError::network(fallback)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = AppError::from_status(status.as_u16(), &body, fallback);
            tracing::warn!(status = status.as_u16(), kind = %err.kind, "backend returned an error");
            return Err(err);
        }

        let envelope = response.json::<ApiResponse<T>>().await.map_err(|e| {
            tracing::warn!(error = %e, "backend response did not match the expected shape");
            AppError::internal(fallback)
        })?;
        Ok(envelope.data)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
