//! Route guards: one check state machine, two redirect policies.
//!
//! DESIGN
//! ======
//! `Protected` pages redirect unauthenticated visitors to `/login`; `Public`
//! pages (login/signup) redirect authenticated visitors to `/dashboard`.
//! Both share the same check: token fast path, then the de-duplicated auth
//! status probe. Every mount restarts from `Checking`; a check that resolves
//! after its guard unmounted is dropped without touching state or navigating.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::LOGIN_PATH;
use crate::state::auth::{AuthCheck, AuthProbe};
use crate::state::session::SessionStore;

/// Landing page for authenticated users bounced off public pages.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Which direction a guard redirects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Render only for authenticated sessions; bounce others to `/login`.
    Protected,
    /// Render only for anonymous visitors; bounce signed-in ones to
    /// `/dashboard` so they never see the login/signup forms.
    Public,
}

/// What a guard does with a resolved check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Check still running; show the placeholder.
    Loading,
    /// Render the wrapped page.
    Render,
    /// Replace-navigate to the target path.
    Redirect(&'static str),
}

/// The full policy table. Pure so every row is testable.
#[must_use]
pub fn decide(policy: GuardPolicy, check: AuthCheck) -> GuardDecision {
    match (policy, check) {
        (_, AuthCheck::Checking) => GuardDecision::Loading,
        (GuardPolicy::Protected, AuthCheck::Authenticated)
        | (GuardPolicy::Public, AuthCheck::Unauthenticated) => GuardDecision::Render,
        (GuardPolicy::Protected, AuthCheck::Unauthenticated) => {
            GuardDecision::Redirect(LOGIN_PATH)
        }
        (GuardPolicy::Public, AuthCheck::Authenticated) => GuardDecision::Redirect(DASHBOARD_PATH),
    }
}

/// Guard wrapper composed around every routed page.
#[component]
pub fn Guard(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let probe = expect_context::<AuthProbe>();
    let check = RwSignal::new(AuthCheck::Checking);
    let navigate = use_navigate();

    // Kick off the check once per mount. The cleanup flag keeps a late
    // resolution from writing to a torn-down view.
    #[cfg(feature = "hydrate")]
    {
        let cancelled = std::rc::Rc::new(std::cell::Cell::new(false));
        on_cleanup({
            let cancelled = cancelled.clone();
            move || cancelled.set(true)
        });
        let probe = probe.clone();
        leptos::task::spawn_local(async move {
            let outcome = probe.resolve(session).await;
            if !cancelled.get() {
                check.set(outcome);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&session, &probe);
    }

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decide(policy, check.get()) {
            log_redirect(policy, target);
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decide(policy, check.get()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading | GuardDecision::Redirect(_) => view! {
            <div class="guard-placeholder">
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
    }
}

#[cfg(feature = "hydrate")]
fn log_redirect(policy: GuardPolicy, target: &str) {
    log::info!("guard {policy:?} redirecting to {target}");
}

#[cfg(not(feature = "hydrate"))]
fn log_redirect(_policy: GuardPolicy, _target: &str) {}
