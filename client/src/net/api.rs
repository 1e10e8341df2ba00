//! REST API helpers for communicating with the campus backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! Every authenticated call reads `x-user-id` / `x-user-role` from the auth
//! context at send time. Nothing here caches them, so a request issued after
//! `logout` can never carry the previous user's identity.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade UI
//! behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use access::{IdentityClaim, IdentityHeaders};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::auth::AuthContext;

/// Backend used when `PORTAL_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Error returned by REST helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No identity is logged in; the request was not sent.
    #[error("not signed in")]
    Unauthenticated,
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Base URL of the REST backend, without a trailing slash.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_BASE_URL).trim_end_matches('/')
}

/// Join `base` and `path` with exactly one slash between them.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Headers for an authenticated call, or [`ApiError::Unauthenticated`].
fn require_headers(headers: Option<IdentityHeaders>) -> Result<IdentityHeaders, ApiError> {
    headers.ok_or(ApiError::Unauthenticated)
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
fn with_identity(
    mut builder: gloo_net::http::RequestBuilder,
    headers: &IdentityHeaders,
) -> gloo_net::http::RequestBuilder {
    for (name, value) in headers.pairs() {
        builder = builder.header(name, value);
    }
    builder
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    check_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET {base}/{path}` as the current user, decoding a JSON body.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn get_json<T: DeserializeOwned>(auth: AuthContext, path: &str) -> Result<T, ApiError> {
    let headers = require_headers(auth.headers())?;
    let url = endpoint(api_base_url(), path);
    #[cfg(feature = "hydrate")]
    {
        let resp = with_identity(gloo_net::http::Request::get(&url), &headers)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (headers, url);
        Err(ApiError::Unavailable)
    }
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for an identity via `POST {base}/auth/login`.
/// The returned claim still has to go through `AuthContext::login`.
///
/// # Errors
///
/// See [`ApiError`]; `Status(401)` means the credentials were rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<IdentityClaim, ApiError> {
    let url = endpoint(api_base_url(), "auth/login");
    let body = SignInRequest { email, password };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
