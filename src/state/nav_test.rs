use super::*;

#[test]
fn menu_starts_closed() {
    let nav = NavState::default();
    assert!(!nav.is_open());
    assert_eq!(nav.aria_expanded(), "false");
}

#[test]
fn toggle_flips_open_flag() {
    let mut nav = NavState::default();
    nav.toggle();
    assert!(nav.is_open());
    assert_eq!(nav.aria_expanded(), "true");
    nav.toggle();
    assert!(!nav.is_open());
}

#[test]
fn link_click_closes_menu() {
    let mut nav = NavState::default();
    nav.toggle();
    nav.close();
    assert!(!nav.is_open());
}

#[test]
fn outside_click_closes_only_when_open() {
    let mut nav = NavState::default();
    assert!(!nav.click_outside(false));

    nav.toggle();
    assert!(!nav.click_outside(true));
    assert!(nav.is_open());

    assert!(nav.click_outside(false));
    assert!(!nav.is_open());
}
