use super::*;

#[test]
fn greeting_includes_the_display_name() {
    assert_eq!(greeting("Ada"), "Welcome back, Ada");
}

#[test]
fn greeting_degrades_without_a_name() {
    assert_eq!(greeting(""), "Welcome back");
}

#[test]
fn track_blurb_differs_by_account_type() {
    assert_ne!(track_blurb(AccountType::School), track_blurb(AccountType::College));
}
