use super::*;

// =============================================================
// CGPA parsing
// =============================================================

#[test]
fn empty_cgpa_is_unset() {
    assert_eq!(parse_cgpa(""), Ok(None));
    assert_eq!(parse_cgpa("   "), Ok(None));
}

#[test]
fn valid_cgpa_parses() {
    assert_eq!(parse_cgpa("8.2"), Ok(Some(8.2)));
    assert_eq!(parse_cgpa(" 10 "), Ok(Some(10.0)));
    assert_eq!(parse_cgpa("0"), Ok(Some(0.0)));
}

#[test]
fn out_of_range_or_garbage_cgpa_is_rejected() {
    assert!(parse_cgpa("11").is_err());
    assert!(parse_cgpa("-1").is_err());
    assert!(parse_cgpa("eight").is_err());
}

// =============================================================
// Interests field
// =============================================================

#[test]
fn interests_split_on_commas_and_trim() {
    assert_eq!(
        parse_interests(" robotics , music,,biology "),
        vec!["robotics".to_owned(), "music".to_owned(), "biology".to_owned()]
    );
}

#[test]
fn empty_interests_field_is_empty_list() {
    assert!(parse_interests("").is_empty());
    assert!(parse_interests(" , , ").is_empty());
}

#[test]
fn interests_text_round_trips() {
    let tags = vec!["robotics".to_owned(), "music".to_owned()];
    assert_eq!(parse_interests(&interests_text(&tags)), tags);
}
