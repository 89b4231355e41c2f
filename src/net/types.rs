//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads exactly so serde round-trips stay
//! lossless and page code never touches raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Result of the auth status query, the backend's ground truth for whether
/// the current credential is still valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    /// Whether the presented credential is currently valid.
    pub authenticated: bool,
    /// Profile payload, present only when `authenticated` is true.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AuthStatus {
    /// The uniform "not signed in" value. Network errors, malformed bodies,
    /// and explicit `authenticated:false` all collapse into this.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { authenticated: false, user: None }
    }
}

/// Profile fields returned alongside a valid auth status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// Successful login/signup response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account flavor tag (`"school"` or `"college"`).
    #[serde(default)]
    pub account_type: Option<String>,
}

/// Editable profile as served by `/api/users/me/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Account flavor tag (`"school"` or `"college"`).
    pub account_type: String,
    /// Cumulative GPA, college accounts only.
    #[serde(default)]
    pub cgpa: Option<f64>,
    /// Free-form interest tags.
    #[serde(default)]
    pub interests: Vec<String>,
}

/// A single generated quiz question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Stable question id echoed back on submission.
    pub id: String,
    /// Question text.
    pub prompt: String,
    /// Answer options; the submitted answer is an index into this list.
    pub options: Vec<String>,
}

/// One submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// Question id from [`QuizQuestion::id`].
    pub question_id: String,
    /// Index of the chosen option.
    pub selected: usize,
}

/// Graded quiz outcome with guidance text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Questions answered correctly.
    pub score: u32,
    /// Total questions graded.
    pub total: u32,
    /// Markdown career guidance generated from the answers.
    pub guidance: String,
}

/// Reply from the AI chat advisor proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Markdown reply text.
    pub reply: String,
}
