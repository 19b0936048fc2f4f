//! Tests for the theme toggle state machine

use rstest::rstest;

use super::models::ThemePreference;
use super::switcher::{ThemeSwitcher, TRANSITION_DURATION};

#[rstest]
#[case(ThemePreference::Light)]
#[case(ThemePreference::Dark)]
fn initialize_establishes_value_and_clears_flag(#[case] initial: ThemePreference) {
    let mut switcher = ThemeSwitcher::default();
    switcher.initialize(initial);
    assert_eq!(switcher.current(), initial);
    assert!(!switcher.is_transitioning());
}

#[test]
fn initialize_is_idempotent() {
    let mut once = ThemeSwitcher::default();
    once.initialize(ThemePreference::Dark);

    let mut twice = ThemeSwitcher::default();
    twice.initialize(ThemePreference::Dark);
    twice.initialize(ThemePreference::Dark);

    assert_eq!(once.current(), twice.current());
    assert_eq!(once.is_transitioning(), twice.is_transitioning());
}

#[rstest]
#[case(ThemePreference::Light, ThemePreference::Dark)]
#[case(ThemePreference::Dark, ThemePreference::Light)]
fn toggle_flips_to_the_opposite_value(
    #[case] initial: ThemePreference,
    #[case] expected: ThemePreference,
) {
    let mut switcher = ThemeSwitcher::default();
    switcher.initialize(initial);

    let flip = switcher.begin_toggle();
    // The flag is raised before the flip is applied
    assert!(switcher.is_transitioning());
    assert_eq!(switcher.current(), initial);
    assert_eq!(flip.next, expected);

    switcher.apply(flip.next);
    assert_eq!(switcher.current(), expected);

    switcher.end_transition(flip.token);
    assert!(!switcher.is_transitioning());
}

#[test]
fn double_toggle_returns_to_start() {
    let mut switcher = ThemeSwitcher::default();
    switcher.initialize(ThemePreference::Light);

    for _ in 0..2 {
        let flip = switcher.begin_toggle();
        switcher.apply(flip.next);
        switcher.end_transition(flip.token);
    }

    assert_eq!(switcher.current(), ThemePreference::Light);
    assert!(!switcher.is_transitioning());
}

#[test]
fn stale_reset_does_not_end_a_newer_transition() {
    let mut switcher = ThemeSwitcher::default();
    switcher.initialize(ThemePreference::Light);

    let first = switcher.begin_toggle();
    switcher.apply(first.next);

    // A second toggle starts before the first reset timer fires
    let second = switcher.begin_toggle();
    switcher.apply(second.next);

    // The first timer firing now must not lower the flag
    switcher.end_transition(first.token);
    assert!(switcher.is_transitioning());

    switcher.end_transition(second.token);
    assert!(!switcher.is_transitioning());
}

#[test]
fn transition_duration_is_one_second() {
    assert_eq!(TRANSITION_DURATION.as_millis(), 1000);
}
