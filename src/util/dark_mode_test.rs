#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_light_without_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn apply_persist_and_commit_are_callable_noops() {
    apply(Theme::Dark);
    persist(Theme::Light);
    commit(Theme::Dark);
}
