//! Auth check state machine shared by route guards and the redirect watcher.
//!
//! DESIGN
//! ======
//! One check, three states. Every consumer starts at `Checking`, takes the
//! offline fast path when no token is stored (no network call), and
//! otherwise resolves through a single in-flight auth status query shared by
//! all concurrent callers. A resolved check is never cached: the next
//! navigation re-validates from scratch.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthStatus;
use crate::state::session::SessionStore;

/// Outcome of an auth check as seen by guards and the watcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthCheck {
    /// Check in progress; render a loading placeholder.
    #[default]
    Checking,
    /// Backend confirmed the credential.
    Authenticated,
    /// No token stored, or the backend rejected the credential, or the check
    /// itself failed. All three are one state.
    Unauthenticated,
}

/// Classify a check round from its inputs.
///
/// `status` is `None` on the fast path (no token stored, no network call
/// made). Callers that reach the network pass the fetched status, which
/// already folds transport failures into `authenticated:false`.
#[must_use]
pub fn classify(token_present: bool, status: Option<&AuthStatus>) -> AuthCheck {
    if !token_present {
        return AuthCheck::Unauthenticated;
    }
    match status {
        Some(status) if status.authenticated => AuthCheck::Authenticated,
        _ => AuthCheck::Unauthenticated,
    }
}

/// Apply a fetched status to the session store and classify it.
///
/// Success refreshes the cached name/email (full-record write, token kept);
/// anything else clears the store entirely.
fn apply_status(session: SessionStore, status: &AuthStatus) -> AuthCheck {
    let check = classify(true, Some(status));
    if check == AuthCheck::Authenticated {
        if let (Some(user), Some(record)) = (status.user.as_ref(), session.load()) {
            session.set(&record.with_profile(&user.email, &user.name));
        }
    } else {
        session.clear();
    }
    check
}

#[cfg(feature = "hydrate")]
type SharedStatus =
    futures::future::Shared<futures::future::LocalBoxFuture<'static, AuthStatus>>;

/// De-duplicated auth check, provided once via context.
///
/// A guard and the redirect watcher mounting on the same navigation share
/// one network round-trip: the first caller starts the query and concurrent
/// callers await a clone of the same in-flight future. The slot is emptied
/// on resolution so no result outlives its request/response pair.
#[derive(Clone, Default)]
pub struct AuthProbe {
    #[cfg(feature = "hydrate")]
    inflight: std::rc::Rc<std::cell::RefCell<Option<SharedStatus>>>,
}

impl AuthProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the current auth state.
    ///
    /// Fast path first: no stored token means `Unauthenticated` with zero
    /// network calls. Otherwise the shared status query runs and its result
    /// is applied to the session store.
    pub async fn resolve(&self, session: SessionStore) -> AuthCheck {
        if session.token().is_none() {
            return AuthCheck::Unauthenticated;
        }
        let status = self.status(session).await;
        apply_status(session, &status)
    }

    #[cfg(feature = "hydrate")]
    async fn status(&self, session: SessionStore) -> AuthStatus {
        use futures::FutureExt;

        let fut = {
            let mut slot = self.inflight.borrow_mut();
            if let Some(inflight) = slot.as_ref() {
                inflight.clone()
            } else {
                let fut = async move { crate::net::api::fetch_auth_status(session).await }
                    .boxed_local()
                    .shared();
                *slot = Some(fut.clone());
                fut
            }
        };
        let status = fut.await;
        self.inflight.borrow_mut().take();
        status
    }

    #[cfg(not(feature = "hydrate"))]
    async fn status(&self, session: SessionStore) -> AuthStatus {
        crate::net::api::fetch_auth_status(session).await
    }
}
