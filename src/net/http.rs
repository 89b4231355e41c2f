//! Authenticated HTTP plumbing over `gloo-net`.
//!
//! Every request goes through here: the stored bearer token is attached on
//! the way out, and a 401 on the way back clears the session store and
//! hard-replaces the location with `/login` before the caller sees the
//! response. That redirect is the last line of defense against a token that
//! expired on the server but not yet on the client.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so network
//! failures degrade page behavior without crashing hydration. Auth cleanup
//! happens here, never in page code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::SessionStore;

/// Path the 401 cleanup replaces the location with.
pub const LOGIN_PATH: &str = "/login";

/// Per-request policy for a 401 response.
///
/// `RedirectToLogin` is the default: clear the session store and replace the
/// location with `/login`, short-circuiting the caller. `Propagate` skips
/// the global cleanup for call sites that own the decision, such as the auth
/// status query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnUnauthorized {
    #[default]
    RedirectToLogin,
    Propagate,
}

/// `Authorization` header value for a stored token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a status code triggers the global session cleanup.
#[must_use]
pub fn is_unauthorized(status: u16) -> bool {
    status == 401
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn unauthorized_message() -> String {
    "session expired".to_owned()
}

/// Error text surfaced to forms: the backend's `error` field verbatim when
/// present, otherwise a generic status message.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| request_failed_message(status))
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(LOGIN_PATH);
    }
}

#[cfg(feature = "hydrate")]
fn with_bearer(
    req: gloo_net::http::RequestBuilder,
    session: SessionStore,
) -> gloo_net::http::RequestBuilder {
    match session.token() {
        Some(token) => req.header("Authorization", &bearer_value(&token)),
        None => req,
    }
}

/// Apply the 401 policy to a response, then surface non-OK statuses as form
/// error text.
#[cfg(feature = "hydrate")]
async fn check(
    resp: gloo_net::http::Response,
    session: SessionStore,
    on_unauthorized: OnUnauthorized,
) -> Result<gloo_net::http::Response, String> {
    if is_unauthorized(resp.status()) {
        if on_unauthorized == OnUnauthorized::RedirectToLogin {
            session.clear();
            redirect_to_login();
        }
        return Err(unauthorized_message());
    }
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(error_from_body(resp.status(), &body));
    }
    Ok(resp)
}

/// `GET path` with bearer auth, decoding a JSON body.
///
/// # Errors
///
/// Returns form-ready error text on network failure, non-OK status, or a
/// body that fails to decode.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    session: SessionStore,
    on_unauthorized: OnUnauthorized,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::get(path), session)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, session, on_unauthorized).await?;
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, session, on_unauthorized);
        Err("not available on server".to_owned())
    }
}

/// `POST path` with bearer auth and a JSON body, decoding a JSON response.
///
/// # Errors
///
/// Same contract as [`get_json`].
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    session: SessionStore,
    on_unauthorized: OnUnauthorized,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(path), session)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, session, on_unauthorized).await?;
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, session, on_unauthorized);
        Err("not available on server".to_owned())
    }
}

/// `PATCH path` with bearer auth and a JSON body, decoding a JSON response.
///
/// # Errors
///
/// Same contract as [`get_json`].
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    session: SessionStore,
    on_unauthorized: OnUnauthorized,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::patch(path), session)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let resp = check(resp, session, on_unauthorized).await?;
        resp.json::<T>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body, session, on_unauthorized);
        Err("not available on server".to_owned())
    }
}

/// `POST path` with bearer auth and no body, ignoring the response body.
///
/// # Errors
///
/// Same contract as [`get_json`].
pub async fn post_empty(
    path: &str,
    session: SessionStore,
    on_unauthorized: OnUnauthorized,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_bearer(gloo_net::http::Request::post(path), session)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check(resp, session, on_unauthorized).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, session, on_unauthorized);
        Err("not available on server".to_owned())
    }
}
