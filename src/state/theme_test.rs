use super::*;

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn stored_choice_wins_over_system_signal() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    assert_eq!(resolve_initial(Some("dark"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some("light"), false), Theme::Light);
}

#[test]
fn system_signal_used_when_nothing_stored() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_falls_through_to_system_signal() {
    assert_eq!(resolve_initial(Some("sepia"), true), Theme::Dark);
    assert_eq!(resolve_initial(Some(""), false), Theme::Light);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_string_forms_round_trip() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("DARK"), None);
}

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn toggle_twice_restores_theme_and_persisted_value() {
    let mut state = ThemeState::new(Theme::Dark);
    assert_eq!(state.persisted(), None);

    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(state.persisted(), Some(Theme::Light));

    assert_eq!(state.toggle(), Theme::Dark);
    assert_eq!(state.get(), Theme::Dark);
    assert_eq!(state.persisted(), Some(Theme::Dark));
}

#[test]
fn set_persists_immediately() {
    let mut state = ThemeState::new(Theme::Light);
    state.set(Theme::Dark);
    assert_eq!(state.get(), Theme::Dark);
    assert_eq!(state.persisted(), Some(Theme::Dark));
}
