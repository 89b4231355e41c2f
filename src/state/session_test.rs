use super::*;

// =============================================================
// AccountType tags
// =============================================================

#[test]
fn account_type_tag_round_trips() {
    assert_eq!(AccountType::from_tag("school"), AccountType::School);
    assert_eq!(AccountType::from_tag("college"), AccountType::College);
    assert_eq!(AccountType::School.as_tag(), "school");
    assert_eq!(AccountType::College.as_tag(), "college");
}

#[test]
fn unknown_tag_defaults_to_school() {
    assert_eq!(AccountType::from_tag(""), AccountType::School);
    assert_eq!(AccountType::from_tag("corporate"), AccountType::School);
}

#[test]
fn account_type_default_is_school() {
    assert_eq!(AccountType::default(), AccountType::School);
}

// =============================================================
// Session record
// =============================================================

#[test]
fn with_profile_keeps_token_and_account_type() {
    let session = Session {
        token: "tok-1".to_owned(),
        email: "old@example.com".to_owned(),
        display_name: "Old".to_owned(),
        account_type: AccountType::College,
    };
    let refreshed = session.with_profile("a@b.com", "A");
    assert_eq!(refreshed.token, "tok-1");
    assert_eq!(refreshed.email, "a@b.com");
    assert_eq!(refreshed.display_name, "A");
    assert_eq!(refreshed.account_type, AccountType::College);
}

// =============================================================
// Store fallbacks outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_reads_are_empty_in_non_hydrate_tests() {
    let store = SessionStore;
    assert!(store.token().is_none());
    assert!(store.load().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn store_writes_are_noops_but_callable() {
    let store = SessionStore;
    store.set(&Session {
        token: "tok".to_owned(),
        email: String::new(),
        display_name: String::new(),
        account_type: AccountType::School,
    });
    store.clear();
    assert!(store.token().is_none());
}
