//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` through
//! [`crate::net::http`]. Server-side (SSR): stubs returning `None`/error
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Auth infrastructure failures never reach page code: the 401 cleanup
//! happens in `net::http`, and [`fetch_auth_status`] folds every failure
//! into an unauthenticated result. Pages only handle their own domain
//! errors (bad credentials, failed profile save).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{self, OnUnauthorized};
use crate::net::types::{
    AuthStatus, ChatReply, LoginResponse, Profile, QuizAnswer, QuizQuestion, QuizResult,
};
use crate::state::session::SessionStore;

const AUTH_STATUS_ENDPOINT: &str = "/api/auth/status";
const LOGIN_ENDPOINT: &str = "/api/auth/login";
const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";
const PROFILE_ENDPOINT: &str = "/api/users/me/profile";
const QUIZ_GENERATE_ENDPOINT: &str = "/api/quiz/generate";
const QUIZ_SUBMIT_ENDPOINT: &str = "/api/quiz/submit";
const CHAT_ENDPOINT: &str = "/api/chat";

/// Ask the backend whether the stored credential is still valid.
///
/// Never fails: a network error, a malformed body, and an explicit
/// `authenticated:false` all return the same unauthenticated value, so every
/// caller folds "call failed" and "says false" into one branch. Uses
/// `Propagate` because its callers own the session-clearing decision.
pub async fn fetch_auth_status(session: SessionStore) -> AuthStatus {
    http::get_json::<AuthStatus>(AUTH_STATUS_ENDPOINT, session, OnUnauthorized::Propagate)
        .await
        .unwrap_or_else(|_| AuthStatus::unauthenticated())
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns the backend's error message verbatim for the login form. A 401
/// here means bad credentials, not an expired session, so it propagates.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    let payload = serde_json::json!({ "email": email, "password": password });
    http::post_json(LOGIN_ENDPOINT, &payload, SessionStore, OnUnauthorized::Propagate).await
}

/// Create an account and sign in.
///
/// # Errors
///
/// Returns the backend's error message verbatim for the signup form.
pub async fn signup(
    email: &str,
    password: &str,
    name: &str,
    account_type: &str,
) -> Result<LoginResponse, String> {
    let payload = serde_json::json!({
        "email": email,
        "password": password,
        "name": name,
        "account_type": account_type,
    });
    http::post_json(SIGNUP_ENDPOINT, &payload, SessionStore, OnUnauthorized::Propagate).await
}

/// Log out on the backend, best effort. The caller clears the session store
/// regardless of the outcome; logout is client-authoritative.
pub async fn logout(session: SessionStore) {
    let _ = http::post_empty(LOGOUT_ENDPOINT, session, OnUnauthorized::Propagate).await;
}

/// Fetch the editable profile. Returns `None` on any failure.
pub async fn fetch_profile(session: SessionStore) -> Option<Profile> {
    http::get_json(PROFILE_ENDPOINT, session, OnUnauthorized::RedirectToLogin)
        .await
        .ok()
}

/// Save profile edits and return the stored result.
///
/// # Errors
///
/// Returns form-ready error text; session state is untouched by domain
/// failures.
pub async fn update_profile(session: SessionStore, profile: &Profile) -> Result<Profile, String> {
    http::patch_json(PROFILE_ENDPOINT, profile, session, OnUnauthorized::RedirectToLogin).await
}

/// Generate quiz questions for a topic.
///
/// # Errors
///
/// Returns form-ready error text if generation fails.
pub async fn generate_quiz(
    session: SessionStore,
    topic: &str,
) -> Result<Vec<QuizQuestion>, String> {
    let payload = serde_json::json!({ "topic": topic });
    http::post_json(QUIZ_GENERATE_ENDPOINT, &payload, session, OnUnauthorized::RedirectToLogin)
        .await
}

/// Submit quiz answers for grading and guidance.
///
/// # Errors
///
/// Returns form-ready error text if grading fails.
pub async fn submit_quiz(
    session: SessionStore,
    answers: &[QuizAnswer],
) -> Result<QuizResult, String> {
    let payload = serde_json::json!({ "answers": answers });
    http::post_json(QUIZ_SUBMIT_ENDPOINT, &payload, session, OnUnauthorized::RedirectToLogin).await
}

/// Send one message to the AI advisor and wait for its reply.
///
/// # Errors
///
/// Returns form-ready error text if the proxy call fails.
pub async fn send_chat_message(session: SessionStore, message: &str) -> Result<ChatReply, String> {
    let payload = serde_json::json!({ "message": message });
    http::post_json(CHAT_ENDPOINT, &payload, session, OnUnauthorized::RedirectToLogin).await
}
