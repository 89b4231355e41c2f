use super::*;

#[test]
fn validate_signup_input_trims_fields() {
    assert_eq!(
        validate_signup_input(" a@b.com ", "longenough", " Ada "),
        Ok(("a@b.com".to_owned(), "longenough".to_owned(), "Ada".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_name_and_email() {
    assert_eq!(
        validate_signup_input("", "longenough", "Ada"),
        Err("Enter your name and email.")
    );
    assert_eq!(
        validate_signup_input("a@b.com", "longenough", "  "),
        Err("Enter your name and email.")
    );
}

#[test]
fn validate_signup_input_enforces_password_length() {
    assert_eq!(
        validate_signup_input("a@b.com", "short", "Ada"),
        Err("Password must be at least 8 characters.")
    );
}
