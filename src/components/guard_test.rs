use super::*;

// =============================================================
// Policy table
// =============================================================

#[test]
fn checking_always_shows_the_placeholder() {
    assert_eq!(decide(GuardPolicy::Protected, AuthCheck::Checking), GuardDecision::Loading);
    assert_eq!(decide(GuardPolicy::Public, AuthCheck::Checking), GuardDecision::Loading);
}

#[test]
fn protected_renders_authenticated_sessions() {
    assert_eq!(
        decide(GuardPolicy::Protected, AuthCheck::Authenticated),
        GuardDecision::Render
    );
}

#[test]
fn protected_bounces_anonymous_visitors_to_login() {
    assert_eq!(
        decide(GuardPolicy::Protected, AuthCheck::Unauthenticated),
        GuardDecision::Redirect("/login")
    );
}

#[test]
fn public_renders_anonymous_visitors() {
    assert_eq!(decide(GuardPolicy::Public, AuthCheck::Unauthenticated), GuardDecision::Render);
}

#[test]
fn public_bounces_authenticated_sessions_to_dashboard() {
    assert_eq!(
        decide(GuardPolicy::Public, AuthCheck::Authenticated),
        GuardDecision::Redirect("/dashboard")
    );
}

// =============================================================
// End-to-end over classify: full navigation scenarios
// =============================================================

use crate::net::types::{AuthStatus, AuthUser};
use crate::state::auth::classify;

#[test]
fn visiting_dashboard_without_a_token_redirects_to_login() {
    // No token: the fast path resolves without any status fetch.
    let check = classify(false, None);
    assert_eq!(decide(GuardPolicy::Protected, check), GuardDecision::Redirect("/login"));
}

#[test]
fn visiting_dashboard_with_a_valid_token_renders() {
    let status = AuthStatus {
        authenticated: true,
        user: Some(AuthUser { email: "a@b.com".to_owned(), name: "A".to_owned() }),
    };
    let check = classify(true, Some(&status));
    assert_eq!(decide(GuardPolicy::Protected, check), GuardDecision::Render);
}

#[test]
fn visiting_dashboard_with_a_rejected_token_redirects_to_login() {
    let check = classify(true, Some(&AuthStatus::unauthenticated()));
    assert_eq!(decide(GuardPolicy::Protected, check), GuardDecision::Redirect("/login"));
}

#[test]
fn visiting_login_with_a_valid_token_redirects_to_dashboard() {
    let status = AuthStatus { authenticated: true, user: None };
    let check = classify(true, Some(&status));
    assert_eq!(decide(GuardPolicy::Public, check), GuardDecision::Redirect("/dashboard"));
}
