#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn get_item_is_none_in_non_hydrate_tests() {
    assert!(get_item("compass_token").is_none());
}

#[test]
fn set_and_remove_are_noops_but_callable() {
    set_item("compass_token", "abc");
    remove_item("compass_token");
    assert!(get_item("compass_token").is_none());
}
