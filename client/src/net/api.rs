//! REST API client for the portal backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere (native tests): calls fail with [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The default `Authorization` value lives on an injected [`ApiClient`]
//! rather than in a process-wide header table. Clones share one bearer slot,
//! so every page holding the context client sends the same credential.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed [`ApiError`] values instead of panics; the session gate
//! folds all of them into a login redirect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Arc, Mutex};

use super::types::{TokenResponse, VerifyResponse};

/// Token verification endpoint.
pub const VERIFY_ENDPOINT: &str = "/api/testToken";

/// Password login endpoint (form-encoded).
pub const TOKEN_ENDPOINT: &str = "/api/token";

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Backend operations the session gate depends on.
pub trait SessionApi {
    /// Set the default bearer credential for subsequent requests.
    fn set_bearer(&self, token: &str);

    /// Call the verification endpoint with the current bearer credential.
    fn verify(&self) -> impl Future<Output = Result<VerifyResponse, ApiError>>;
}

/// HTTP client shared through context.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    bearer: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current default bearer token, if any.
    pub fn bearer(&self) -> Option<String> {
        self.bearer.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn set_bearer(&self, token: &str) {
        if let Ok(mut slot) = self.bearer.lock() {
            *slot = Some(token.to_owned());
        }
    }

    pub fn clear_bearer(&self) {
        if let Ok(mut slot) = self.bearer.lock() {
            *slot = None;
        }
    }

    #[cfg(any(test, feature = "csr"))]
    fn authorization(&self) -> Option<String> {
        self.bearer().map(|token| bearer_header(&token))
    }

    #[cfg_attr(not(feature = "csr"), allow(clippy::unused_self))]
    async fn fetch_verification(&self) -> Result<VerifyResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut req = gloo_net::http::Request::get(VERIFY_ENDPOINT);
            if let Some(value) = self.authorization() {
                req = req.header("Authorization", &value);
            }
            let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<VerifyResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Exchange username/password for an access token via `POST /api/token`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the server responds with a
    /// non-OK status (bad credentials answer 401), or the body does not decode.
    pub async fn login(&self, username: &str, password: &str, remember: bool) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let form = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            form.append("username", username);
            form.append("password", password);
            form.append("remember", remember_flag(remember));
            let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
                .body(form)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<TokenResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username, password, remember);
            Err(ApiError::Unavailable)
        }
    }
}

impl SessionApi for ApiClient {
    fn set_bearer(&self, token: &str) {
        ApiClient::set_bearer(self, token);
    }

    fn verify(&self) -> impl Future<Output = Result<VerifyResponse, ApiError>> {
        self.fetch_verification()
    }
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn remember_flag(remember: bool) -> &'static str {
    if remember { "true" } else { "false" }
}
