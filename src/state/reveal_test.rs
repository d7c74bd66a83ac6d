use super::*;

// =============================================================
// observe
// =============================================================

#[test]
fn reveals_once_threshold_is_crossed() {
    let mut tracker = RevealTracker::default();
    assert_eq!(tracker.observe("about", true, 0.1), None);
    let reveal = tracker.observe("about", true, 0.2).unwrap();
    assert_eq!(reveal.section_id, "about");
    assert!(!reveal.animate_skill_bars);
    assert!(tracker.is_revealed("about"));
}

#[test]
fn reveals_exactly_once_across_reentries() {
    let mut tracker = RevealTracker::default();
    let mut fired = 0;
    for ratio in [0.5, 0.0, 0.9, 0.1, 0.3, 1.0] {
        if tracker.observe("projects", ratio > 0.0, ratio).is_some() {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert_eq!(tracker.revealed_count(), 1);
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut tracker = RevealTracker::default();
    assert_eq!(tracker.observe("about", false, 0.5), None);
    assert!(!tracker.is_revealed("about"));
}

#[test]
fn skills_reveal_requests_bar_animation() {
    let mut tracker = RevealTracker::default();
    let reveal = tracker.observe(SKILLS_SECTION_ID, true, 0.25).unwrap();
    assert!(reveal.animate_skill_bars);
    assert_eq!(tracker.observe(SKILLS_SECTION_ID, true, 0.25), None);
}

#[test]
fn sections_are_tracked_independently() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.observe("about", true, 0.3).is_some());
    assert!(tracker.observe("contact", true, 0.3).is_some());
    assert_eq!(tracker.revealed_count(), 2);
}

// =============================================================
// Initial load check
// =============================================================

#[test]
fn initial_view_band_is_eighty_percent_of_viewport() {
    assert!(in_initial_view(0.0, 1000.0));
    assert!(in_initial_view(799.0, 1000.0));
    assert!(!in_initial_view(800.0, 1000.0));
    assert!(!in_initial_view(2400.0, 1000.0));
}

#[test]
fn initial_check_and_observer_share_one_shot_state() {
    let mut tracker = RevealTracker::default();
    let reveal = tracker.check_initial(SKILLS_SECTION_ID, 100.0, 900.0).unwrap();
    assert!(reveal.animate_skill_bars);
    assert_eq!(tracker.observe(SKILLS_SECTION_ID, true, 1.0), None);
}

#[test]
fn initial_check_leaves_far_sections_for_the_observer() {
    let mut tracker = RevealTracker::default();
    assert_eq!(tracker.check_initial("contact", 3000.0, 900.0), None);
    assert!(tracker.observe("contact", true, 0.4).is_some());
}

// =============================================================
// BarAnimation
// =============================================================

#[test]
fn bar_animation_resets_then_restores_captured_width() {
    let bar = BarAnimation::capture("92%");
    assert_eq!(bar.reset_width(), "0");
    assert_eq!(bar.final_width(), "92%");
}
