//! App-wide redirect watcher, mounted once under the router.
//!
//! DESIGN
//! ======
//! Independent of whichever guard wraps the current page, every pathname
//! change re-validates the session through the shared auth probe and
//! replace-navigates when the visitor is on the wrong side of the fence:
//! signed-in users leave the public pages, anonymous users leave everything
//! else. The browser's back/forward (`popstate`) runs only the first half,
//! to stop a signed-in user from surfacing the login page out of history.
//! Probe failures count as unauthenticated, same as everywhere else.

#[cfg(test)]
#[path = "route_watcher_test.rs"]
mod route_watcher_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_location;

use crate::components::guard::DASHBOARD_PATH;
use crate::net::http::LOGIN_PATH;
use crate::state::auth::AuthCheck;
#[cfg(feature = "hydrate")]
use crate::state::auth::AuthProbe;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Paths an authenticated user is bounced away from.
pub const PUBLIC_PATHS: [&str; 3] = ["/login", "/signup", "/"];

/// Whether `path` is public-only (login, signup, landing).
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Redirect decision for a pathname change. `None` means stay put.
#[must_use]
pub fn redirect_target(check: AuthCheck, path: &str) -> Option<&'static str> {
    match check {
        AuthCheck::Checking => None,
        AuthCheck::Authenticated => is_public_path(path).then_some(DASHBOARD_PATH),
        AuthCheck::Unauthenticated => (!is_public_path(path)).then_some(LOGIN_PATH),
    }
}

/// Redirect decision for back/forward navigation. Only the
/// authenticated-on-a-public-path half applies; the guards own the rest.
#[must_use]
pub fn history_redirect_target(check: AuthCheck, path: &str) -> Option<&'static str> {
    match check {
        AuthCheck::Authenticated => is_public_path(path).then_some(DASHBOARD_PATH),
        AuthCheck::Checking | AuthCheck::Unauthenticated => None,
    }
}

/// Watcher component. Renders nothing; installs the path-change effect and
/// the `popstate` listener for the life of the app.
#[component]
pub fn RouteWatcher() -> impl IntoView {
    let location = use_location();

    #[cfg(feature = "hydrate")]
    {
        let session = expect_context::<SessionStore>();
        let probe = expect_context::<AuthProbe>();
        let navigate = use_navigate();

        Effect::new(move || {
            let path = location.pathname.get();
            let probe = probe.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let check = probe.resolve(session).await;
                if let Some(target) = redirect_target(check, &path) {
                    log::info!("route watcher redirecting {path} -> {target}");
                    navigate(
                        target,
                        NavigateOptions { replace: true, ..NavigateOptions::default() },
                    );
                }
            });
        });

        install_popstate_watch(session, expect_context::<AuthProbe>());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = location;
    }
}

/// Re-check on browser back/forward. The listener lives as long as the page,
/// so the closure is intentionally forgotten.
#[cfg(feature = "hydrate")]
fn install_popstate_watch(session: SessionStore, probe: AuthProbe) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        let probe = probe.clone();
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(path) = window.location().pathname() else {
                return;
            };
            let check = probe.resolve(session).await;
            if let Some(target) = history_redirect_target(check, &path) {
                log::info!("popstate redirecting {path} -> {target}");
                let _ = window.location().replace(target);
            }
        });
    });
    let _ = window
        .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}
