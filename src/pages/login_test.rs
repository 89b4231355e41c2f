use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  user@example.com  ", " pw "),
        Ok(("user@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "pw"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("a@b.com", "   "),
        Err("Enter both email and password.")
    );
}

#[test]
fn session_from_login_copies_all_fields() {
    let resp = LoginResponse {
        token: "tok".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        account_type: Some("college".to_owned()),
    };
    let session = session_from_login(&resp);
    assert_eq!(session.token, "tok");
    assert_eq!(session.email, "a@b.com");
    assert_eq!(session.display_name, "A");
    assert_eq!(session.account_type, AccountType::College);
}

#[test]
fn session_from_login_defaults_account_type_to_school() {
    let resp = LoginResponse {
        token: "tok".to_owned(),
        email: "a@b.com".to_owned(),
        name: "A".to_owned(),
        account_type: None,
    };
    assert_eq!(session_from_login(&resp).account_type, AccountType::School);
}
