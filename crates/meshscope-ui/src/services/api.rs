//! HTTP client helpers for the authentication API.

use crate::core::auth::{AuthenticationConfig, LoginSession, basic_auth_header};
use gloo_net::http::{Request, Response};
use meshscope_api_models::{ApiErrorBody, ServerStatus};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failures surfaced by [`ApiClient`].
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request never produced a response, or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-supplied error text, or the status text when absent.
        message: String,
    },
}

impl ApiError {
    pub(crate) const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn fetch_auth_info(&self) -> Result<AuthenticationConfig, ApiError> {
        let resp = Request::get(&self.url("/api/auth/info")).send().await?;
        decode(resp).await
    }

    /// Returns `None` when the server has no session for this browser.
    pub(crate) async fn check_credentials(&self) -> Result<Option<LoginSession>, ApiError> {
        let resp = Request::get(&self.url("/api/authenticate")).send().await?;
        match decode(resp).await {
            Ok(session) => Ok(Some(session)),
            Err(err) if err.is_unauthorized() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub(crate) async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginSession, ApiError> {
        let resp = Request::post(&self.url("/api/authenticate"))
            .header("Authorization", &basic_auth_header(username, password))
            .send()
            .await?;
        decode(resp).await
    }

    pub(crate) async fn fetch_status(&self) -> Result<ServerStatus, ApiError> {
        let resp = Request::get(&self.url("/api/status")).send().await?;
        decode(resp).await
    }

    pub(crate) async fn logout(&self) -> Result<(), ApiError> {
        let resp = Request::get(&self.url("/api/logout")).send().await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(resp).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    Ok(resp.json::<T>().await?)
}

async fn status_error(resp: Response) -> ApiError {
    let status = resp.status();
    let message = match resp.json::<ApiErrorBody>().await {
        Ok(body) if !body.error.trim().is_empty() => body.error,
        _ => format!("{} {}", status, resp.status_text()),
    };
    ApiError::Status { status, message }
}
