#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn observe_sections_is_inert_off_browser() {
    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    observe_sections(Rc::clone(&tracker));
    assert_eq!(tracker.borrow().revealed_count(), 0);
}

#[test]
fn animate_skill_bars_is_callable_off_browser() {
    animate_skill_bars();
}
