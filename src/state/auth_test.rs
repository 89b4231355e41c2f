use super::*;
use crate::net::types::AuthUser;

// =============================================================
// classify: the shared check core
// =============================================================

#[test]
fn missing_token_is_unauthenticated_without_a_status() {
    assert_eq!(classify(false, None), AuthCheck::Unauthenticated);
}

#[test]
fn missing_token_wins_even_with_a_positive_status() {
    let status = AuthStatus {
        authenticated: true,
        user: Some(AuthUser { email: "a@b.com".to_owned(), name: "A".to_owned() }),
    };
    assert_eq!(classify(false, Some(&status)), AuthCheck::Unauthenticated);
}

#[test]
fn positive_status_is_authenticated() {
    let status = AuthStatus {
        authenticated: true,
        user: Some(AuthUser { email: "a@b.com".to_owned(), name: "A".to_owned() }),
    };
    assert_eq!(classify(true, Some(&status)), AuthCheck::Authenticated);
}

#[test]
fn negative_status_and_missing_status_are_the_same_state() {
    let negative = AuthStatus::unauthenticated();
    assert_eq!(classify(true, Some(&negative)), AuthCheck::Unauthenticated);
    assert_eq!(classify(true, None), AuthCheck::Unauthenticated);
}

#[test]
fn classify_is_idempotent_for_a_fixed_status() {
    let status = AuthStatus {
        authenticated: true,
        user: Some(AuthUser { email: "a@b.com".to_owned(), name: "A".to_owned() }),
    };
    assert_eq!(classify(true, Some(&status)), classify(true, Some(&status)));
}

#[test]
fn default_check_state_is_checking() {
    assert_eq!(AuthCheck::default(), AuthCheck::Checking);
}

// =============================================================
// apply_status against the (inert, non-hydrate) store
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_status_classifies_like_classify() {
    let session = SessionStore;
    let positive = AuthStatus {
        authenticated: true,
        user: Some(AuthUser { email: "a@b.com".to_owned(), name: "A".to_owned() }),
    };
    assert_eq!(apply_status(session, &positive), AuthCheck::Authenticated);
    assert_eq!(
        apply_status(session, &AuthStatus::unauthenticated()),
        AuthCheck::Unauthenticated
    );
}

// =============================================================
// AuthProbe fast path
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolve_takes_the_fast_path_without_a_token() {
    let probe = AuthProbe::new();
    let check = block_on(probe.resolve(SessionStore));
    assert_eq!(check, AuthCheck::Unauthenticated);
}

/// Minimal block_on for futures that resolve without I/O.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWake;
    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
