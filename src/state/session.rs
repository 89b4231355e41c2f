//! Persisted session record: auth token plus cached profile fields.
//!
//! DESIGN
//! ======
//! The record lives in four flat `localStorage` keys and survives page
//! reloads, so a refresh does not force re-login. Writes are full-record
//! only: `set` overwrites all four keys and `clear` removes all four, so a
//! name can never outlive its token. Token presence is the client's
//! optimistic "might be logged in" signal; the backend remains the ground
//! truth via the auth status query.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

const TOKEN_KEY: &str = "compass_token";
const EMAIL_KEY: &str = "compass_email";
const NAME_KEY: &str = "compass_name";
const ACCOUNT_TYPE_KEY: &str = "compass_account_type";

/// Account flavor selected at signup; drives school/college page branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountType {
    #[default]
    School,
    College,
}

impl AccountType {
    /// Parse the persisted tag. Unknown or missing tags fall back to
    /// `School` so a stale record still renders something sensible.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "college" => Self::College,
            _ => Self::School,
        }
    }

    /// Tag written to storage and sent on the wire.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::School => "school",
            Self::College => "college",
        }
    }
}

/// Full session record as cached on the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token issued at login.
    pub token: String,
    /// Account email, cached for display.
    pub email: String,
    /// Display name, cached for greetings and the nav bar.
    pub display_name: String,
    /// School/college flavor.
    pub account_type: AccountType,
}

impl Session {
    /// Copy of this record with fresh profile fields and the token kept.
    ///
    /// Guards use this after a successful auth status check so cached
    /// name/email track the backend without exposing partial writes on
    /// [`SessionStore`].
    #[must_use]
    pub fn with_profile(&self, email: &str, display_name: &str) -> Self {
        Self {
            token: self.token.clone(),
            email: email.to_owned(),
            display_name: display_name.to_owned(),
            account_type: self.account_type,
        }
    }
}

/// Handle over the persisted session record.
///
/// Provided once via Leptos context and passed to the HTTP layer and the
/// guards, rather than accessed as ambient global storage. All writes are a
/// full replace or a full clear.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    /// Overwrite the whole record.
    pub fn set(self, session: &Session) {
        storage::set_item(TOKEN_KEY, &session.token);
        storage::set_item(EMAIL_KEY, &session.email);
        storage::set_item(NAME_KEY, &session.display_name);
        storage::set_item(ACCOUNT_TYPE_KEY, session.account_type.as_tag());
    }

    /// Remove the whole record.
    pub fn clear(self) {
        storage::remove_item(TOKEN_KEY);
        storage::remove_item(EMAIL_KEY);
        storage::remove_item(NAME_KEY);
        storage::remove_item(ACCOUNT_TYPE_KEY);
    }

    /// Stored token, if any. The fast offline probe used before any network
    /// round-trip.
    #[must_use]
    pub fn token(self) -> Option<String> {
        storage::get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Full record, or `None` when no token is stored. Missing profile keys
    /// degrade to empty strings rather than invalidating the session.
    #[must_use]
    pub fn load(self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            email: storage::get_item(EMAIL_KEY).unwrap_or_default(),
            display_name: storage::get_item(NAME_KEY).unwrap_or_default(),
            account_type: storage::get_item(ACCOUNT_TYPE_KEY)
                .map(|tag| AccountType::from_tag(&tag))
                .unwrap_or_default(),
        })
    }
}
