use super::*;

#[test]
fn default_chat_is_empty_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.pending);
}

#[test]
fn push_student_marks_reply_pending() {
    let mut state = ChatState::default();
    state.push_student("m1".to_owned(), "hello".to_owned());
    assert!(state.pending);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].author, ChatAuthor::Student);
}

#[test]
fn push_advisor_clears_pending_and_keeps_order() {
    let mut state = ChatState::default();
    state.push_student("m1".to_owned(), "hello".to_owned());
    state.push_advisor("m2".to_owned(), "hi there".to_owned());
    assert!(!state.pending);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].author, ChatAuthor::Advisor);
    assert_eq!(state.messages[1].content, "hi there");
}
