use super::*;

#[test]
fn renders_paragraphs() {
    assert_eq!(render("hello"), "<p>hello</p>\n");
}

#[test]
fn renders_emphasis_and_lists() {
    let out = render("- one\n- **two**");
    assert!(out.contains("<ul>"));
    assert!(out.contains("<strong>two</strong>"));
}

#[test]
fn renders_tables_when_enabled() {
    let out = render("|a|b|\n|-|-|\n|1|2|");
    assert!(out.contains("<table>"));
}
