use super::*;

#[test]
fn auth_status_deserializes_without_user_field() {
    let status: AuthStatus = serde_json::from_str(r#"{"authenticated":false}"#).unwrap();
    assert!(!status.authenticated);
    assert!(status.user.is_none());
}

#[test]
fn auth_status_deserializes_with_user_payload() {
    let status: AuthStatus =
        serde_json::from_str(r#"{"authenticated":true,"user":{"email":"a@b.com","name":"A"}}"#)
            .unwrap();
    assert!(status.authenticated);
    let user = status.user.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "A");
}

#[test]
fn unauthenticated_constructor_has_no_user() {
    let status = AuthStatus::unauthenticated();
    assert!(!status.authenticated);
    assert!(status.user.is_none());
}

#[test]
fn login_response_tolerates_missing_account_type() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"tok","email":"a@b.com","name":"A"}"#).unwrap();
    assert_eq!(resp.token, "tok");
    assert!(resp.account_type.is_none());
}

#[test]
fn profile_defaults_optional_fields() {
    let profile: Profile =
        serde_json::from_str(r#"{"name":"A","account_type":"college"}"#).unwrap();
    assert!(profile.cgpa.is_none());
    assert!(profile.interests.is_empty());
}

#[test]
fn quiz_answer_round_trips() {
    let answer = QuizAnswer { question_id: "q1".to_owned(), selected: 2 };
    let json = serde_json::to_string(&answer).unwrap();
    let back: QuizAnswer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answer);
}
