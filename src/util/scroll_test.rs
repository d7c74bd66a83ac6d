use super::*;

#[test]
fn back_to_top_activates_strictly_above_threshold() {
    assert!(!back_to_top_active(0.0));
    assert!(!back_to_top_active(400.0));
    assert!(back_to_top_active(400.5));
    assert!(back_to_top_active(2000.0));
}

#[test]
fn anchor_offset_subtracts_header_and_margin() {
    assert_eq!(anchor_offset(1000.0, 80.0), 900.0);
    assert_eq!(anchor_offset(50.0, 80.0), -50.0);
}

#[test]
fn fragment_accepts_only_named_in_page_links() {
    assert_eq!(fragment("#about"), Some("#about"));
    assert_eq!(fragment("#"), None);
    assert_eq!(fragment("https://example.com/#about"), None);
    assert_eq!(fragment("about"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_helpers_are_inert_off_browser() {
    assert_eq!(scroll_y(), 0.0);
    smooth_scroll_to(0.0);
    assert!(!scroll_to_anchor("#about"));
    assert!(!scroll_to_anchor("#"));
}
