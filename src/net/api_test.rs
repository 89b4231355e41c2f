#![cfg(not(feature = "hydrate"))]

use super::*;

/// Minimal block_on for the non-hydrate stubs, which resolve immediately.
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

#[test]
fn fetch_auth_status_folds_failure_into_unauthenticated() {
    let status = block_on(fetch_auth_status(SessionStore));
    assert_eq!(status, AuthStatus::unauthenticated());
}

#[test]
fn fetch_profile_is_none_on_failure() {
    assert!(block_on(fetch_profile(SessionStore)).is_none());
}

#[test]
fn login_errors_on_the_server() {
    assert!(block_on(login("a@b.com", "pw")).is_err());
}

#[test]
fn logout_is_best_effort_and_does_not_panic() {
    block_on(logout(SessionStore));
}
