use super::*;

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
}

#[test]
fn only_status_401_is_unauthorized() {
    assert!(is_unauthorized(401));
    assert!(!is_unauthorized(200));
    assert!(!is_unauthorized(400));
    assert!(!is_unauthorized(403));
    assert!(!is_unauthorized(500));
}

#[test]
fn unauthorized_message_is_user_presentable() {
    assert_eq!(unauthorized_message(), "session expired");
}

#[test]
fn error_from_body_surfaces_backend_message_verbatim() {
    assert_eq!(
        error_from_body(400, r#"{"error":"wrong password"}"#),
        "wrong password"
    );
}

#[test]
fn error_from_body_falls_back_to_status_message() {
    assert_eq!(error_from_body(500, "oops"), "request failed: 500");
    assert_eq!(error_from_body(502, ""), "request failed: 502");
}

#[test]
fn unauthorized_policy_defaults_to_redirect() {
    assert_eq!(OnUnauthorized::default(), OnUnauthorized::RedirectToLogin);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_error_on_the_server() {
    let session = crate::state::session::SessionStore;
    let result = block_on(get_json::<serde_json::Value>(
        "/api/auth/status",
        session,
        OnUnauthorized::Propagate,
    ));
    assert!(result.is_err());
}

/// Minimal block_on for futures that resolve without I/O (the non-hydrate
/// stubs return immediately).
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
